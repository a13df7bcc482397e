use super::{Formatter, Ident, Placeholder, ToSql};

use sqlrecord_core::schema::{Field, ID_COLUMN};

/// The expression supplying a field's column value.
///
/// For foreign key fields this is a scalar subquery resolving the bound value
/// to the referenced row's `id`; otherwise it is the field's placeholder.
pub(super) struct FieldValue<'a>(pub(super) &'a Field);

impl ToSql for FieldValue<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = Placeholder(self.0);

        match &self.0.foreign_key {
            Some(fk) => fmt!(
                f, "(SELECT " Ident(ID_COLUMN) " FROM " Ident(&fk.table) " WHERE " Ident(&fk.column) " = " placeholder " LIMIT 1)"
            ),
            None => fmt!(f, placeholder),
        }
    }
}

/// `column = value`
pub(super) struct Assign<'a>(pub(super) &'a Field);

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0.column()) " = " FieldValue(self.0));
    }
}
