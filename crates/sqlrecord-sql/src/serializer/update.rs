use super::{value::Assign, Comma, Delimited, Formatter, Ident, ToSql};

use sqlrecord_core::schema::Model;

pub(super) struct Update<'a>(pub(super) &'a Model);

impl ToSql for Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let model = self.0;
        let table_name = Ident(model.table_name());

        // Foreign key columns are only written on insert
        let assignments = Comma(
            model
                .sql_fields()
                .filter(|field| field.foreign_key.is_none())
                .map(Assign),
        );
        let filter = Delimited(model.key_fields().map(Assign), " AND ");

        fmt!(
            f, "UPDATE " table_name "\nSET " assignments "\nWHERE " filter
        );
    }
}
