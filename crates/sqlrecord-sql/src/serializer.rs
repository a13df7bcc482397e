#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::ParamStyle;
use params::Placeholder;

// Statement serializers
mod create_table;
mod delete;
mod drop_table;
mod insert;
mod prune;
mod ty;
mod update;
mod value;

use crate::{Retention, Statement};

use sqlrecord_core::{
    schema::{Model, CREATED_COLUMN},
    stmt::Type,
    Error, Result,
};
use tracing::debug;

/// Serializes statements for one model to MySQL/InnoDB SQL text.
///
/// Only identifiers taken from the model are written into the statement
/// text. Values are always represented by placeholders named after the field
/// they bind; the returned [`Statement`] lists those field names in
/// placeholder order.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Model the statements are generated for
    model: &'a Model,

    /// How value placeholders are written
    style: ParamStyle,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: String,

    /// Field names bound by each placeholder, in order
    params: Vec<String>,
}

impl<'a> Serializer<'a> {
    pub fn mysql(model: &'a Model) -> Serializer<'a> {
        Serializer {
            model,
            style: ParamStyle::default(),
        }
    }

    /// Sets the placeholder style.
    pub fn param_style(mut self, style: ParamStyle) -> Self {
        self.style = style;
        self
    }

    /// `CREATE TABLE IF NOT EXISTS` with the surrogate `id` key, the `created`
    /// timestamp, one column per non-ignored field, the unique key, and an
    /// index over `id` and the key columns.
    pub fn create_table(&self) -> Statement {
        self.serialize(create_table::CreateTable(self.model))
    }

    /// `INSERT` of every non-ignored field. Key columns turn the statement into
    /// an upsert.
    pub fn insert(&self) -> Statement {
        self.serialize(insert::Insert(self.model))
    }

    /// `UPDATE` of every non-ignored, non-foreign-key field, matched on the key
    /// fields.
    ///
    /// Fails when the model declares no key field, since the statement would
    /// otherwise update every row.
    pub fn update(&self) -> Result<Statement> {
        if !self.model.has_key() {
            return Err(Error::invalid_schema(format!(
                "{}: cannot generate UPDATE without a key field",
                self.model.name()
            )));
        }

        Ok(self.serialize(update::Update(self.model)))
    }

    /// `DELETE` of every row.
    pub fn delete(&self) -> Statement {
        self.serialize(delete::Delete(self.model))
    }

    /// `DROP TABLE IF EXISTS`.
    pub fn drop_table(&self) -> Statement {
        self.serialize(drop_table::DropTable(self.model))
    }

    /// Prunes rows by their `created` timestamp. See [`Serializer::prune_by`].
    pub fn prune(&self, days: u32) -> Result<Statement> {
        self.prune_by(days, CREATED_COLUMN)
    }

    /// Thins out rows whose `column` is older than `days` days.
    ///
    /// Rows inside the window are kept. Older rows are deleted unless their
    /// date is the earliest date of their calendar month, so every month
    /// outside the window keeps one representative row. `column` must be
    /// `created` or the column of a date or datetime field.
    pub fn prune_by(&self, days: u32, column: &str) -> Result<Statement> {
        if column != CREATED_COLUMN {
            let Some(field) = self.model.field_by_column(column) else {
                return Err(Error::invalid_schema(format!(
                    "{}: cannot prune on unknown column `{column}`",
                    self.model.name()
                )));
            };

            if !matches!(field.ty, Type::Date | Type::DateTime) {
                return Err(Error::invalid_schema(format!(
                    "{}: cannot prune on column `{column}` of type {:?}",
                    self.model.name(),
                    field.ty
                )));
            }
        }

        Ok(self.serialize(prune::Prune {
            model: self.model,
            column,
            retention: Retention::new(days),
        }))
    }

    fn serialize(&self, stmt: impl ToSql) -> Statement {
        let mut fmt = Formatter {
            serializer: self,
            dst: String::new(),
            params: vec![],
        };

        stmt.to_sql(&mut fmt);

        debug!(
            table = self.model.table_name(),
            params = fmt.params.len(),
            sql = fmt.dst.as_str(),
            "serialized statement"
        );

        Statement::new(fmt.dst, fmt.params)
    }
}
