use super::{Formatter, Ident, ToSql};
use crate::Retention;

use sqlrecord_core::schema::{Model, ID_COLUMN};

/// Retention thinning.
///
/// Candidate ids are selected in a derived table because MySQL does not allow
/// a `DELETE` to select from its own target table directly.
pub(super) struct Prune<'a> {
    pub(super) model: &'a Model,
    pub(super) column: &'a str,
    pub(super) retention: Retention,
}

/// Dates of the earliest row in each calendar month.
struct MonthlyMinimum<'a> {
    table: Ident<&'a str>,
    column: Ident<&'a str>,
}

impl ToSql for Prune<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Ident(self.model.table_name());
        let id = Ident(ID_COLUMN);
        let column = Ident(self.column);
        let monthly = MonthlyMinimum { table, column };

        fmt!(
            f,
            "DELETE FROM " table "\n"
            "WHERE " id " IN (\n"
            "    SELECT " id " FROM (\n"
            "        SELECT " id "\n"
            "        FROM " table "\n"
            "        WHERE " column " < CURDATE() - INTERVAL " self.retention.days() " DAY\n"
            "        AND DATE(" column ") NOT IN (\n"
            monthly
            "        )\n"
            "    ) AS x\n"
            ")"
        );
    }
}

impl ToSql for MonthlyMinimum<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let Self { table, column } = self;

        // A NULL month group would make the `NOT IN` above unknown for every row
        fmt!(
            f,
            "            SELECT DATE(MIN(" column "))\n"
            "            FROM " table "\n"
            "            WHERE " column " IS NOT NULL\n"
            "            GROUP BY DATE_FORMAT(" column ", '%Y-%m')\n"
        );
    }
}
