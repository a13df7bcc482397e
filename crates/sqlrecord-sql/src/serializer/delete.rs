use super::{Formatter, Ident, ToSql};

use sqlrecord_core::schema::Model;

pub(super) struct Delete<'a>(pub(super) &'a Model);

impl ToSql for Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table_name = Ident(self.0.table_name());
        fmt!(f, "DELETE FROM " table_name);
    }
}
