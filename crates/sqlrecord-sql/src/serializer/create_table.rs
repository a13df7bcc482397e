use super::{ty, Comma, Delimited, Formatter, Ident, ToSql};

use sqlrecord_core::schema::{Field, Model, CREATED_COLUMN, ID_COLUMN};

pub(super) struct CreateTable<'a>(pub(super) &'a Model);

/// One line inside the parentheses of `CREATE TABLE`.
enum TableElement<'a> {
    Id,
    Created,
    Column(&'a Field),
    Unique(&'a Model),
    PrimaryKey,
    Index(&'a Model),
}

impl ToSql for CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let model = self.0;
        let table_name = Ident(model.table_name());

        let mut elements = vec![TableElement::Id, TableElement::Created];
        elements.extend(model.sql_fields().map(TableElement::Column));
        if model.has_key() {
            elements.push(TableElement::Unique(model));
        }
        elements.push(TableElement::PrimaryKey);
        elements.push(TableElement::Index(model));

        fmt!(
            f, "CREATE TABLE IF NOT EXISTS " table_name " (\n    " Delimited(elements, ",\n    ") "\n) ENGINE = INNODB"
        );
    }
}

impl ToSql for TableElement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            TableElement::Id => fmt!(f, Ident(ID_COLUMN) " INT UNSIGNED NOT NULL AUTO_INCREMENT"),
            TableElement::Created => fmt!(
                f, Ident(CREATED_COLUMN) " DATETIME DEFAULT CURRENT_TIMESTAMP COMMENT 'Time stamp of record creation'"
            ),
            TableElement::Column(field) => fmt!(f, Ident(field.column()) " " ty::column_type(field)),
            TableElement::Unique(model) => {
                let columns = Comma(model.key_fields().map(|field| Ident(field.column())));
                fmt!(f, "UNIQUE (" columns ")");
            }
            TableElement::PrimaryKey => fmt!(f, "PRIMARY KEY (" Ident(ID_COLUMN) ")"),
            TableElement::Index(model) => {
                let name = Ident(format!("{}_idx", model.table_name()));
                let columns = Comma(
                    std::iter::once(ID_COLUMN)
                        .chain(model.key_fields().map(Field::column))
                        .map(Ident),
                );
                fmt!(f, "KEY " name " (" columns ")");
            }
        }
    }
}
