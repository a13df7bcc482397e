use super::{value::FieldValue, Comma, Formatter, Ident, ToSql};

use sqlrecord_core::schema::Model;

pub(super) struct Insert<'a>(pub(super) &'a Model);

/// `ON DUPLICATE KEY UPDATE`, leaving key columns unchanged
struct Upsert<'a>(&'a Model);

impl ToSql for Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let model = self.0;
        let table_name = Ident(model.table_name());
        let columns = Comma(model.sql_fields().map(|field| Ident(field.column())));
        let values = Comma(model.sql_fields().map(FieldValue));

        fmt!(
            f, "INSERT INTO " table_name " (" columns ")\nVALUES (" values ")" Upsert(model)
        );
    }
}

impl ToSql for Upsert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.has_key() {
            return;
        }

        let assignments = Comma(self.0.key_fields().map(|field| KeepColumn(field.column())));

        fmt!(f, "\nON DUPLICATE KEY UPDATE " assignments);
    }
}

/// `column = column`
struct KeepColumn<'a>(&'a str);

impl ToSql for KeepColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) " = " Ident(self.0));
    }
}
