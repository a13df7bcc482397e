use super::{table_name, Field};
use crate::Result;

use std::sync::Arc;
use tracing::debug;

/// Describes one record type: its name, its table, and its fields in
/// declaration order.
///
/// Models are built once and shared as `Arc<Model>`; they are never mutated
/// afterwards.
#[derive(Debug)]
pub struct Model {
    name: String,
    table_name: String,
    fields: Vec<Field>,
}

/// Collects fields for a new [`Model`].
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<Field>,
}

impl Model {
    /// Starts declaring a model for the type `name`.
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Starts declaring a model that extends `parent`.
    ///
    /// The new model begins with all of the parent's fields; fields added to the
    /// builder are appended after them.
    pub fn extend(parent: &Model, name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            fields: parent.fields.clone(),
        }
    }

    /// The declared type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The table storing records of this model.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Fields that appear in SQL statements.
    pub fn sql_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.ignore)
    }

    /// Fields that make up the table's unique key.
    pub fn key_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.sql_fields().filter(|field| field.key)
    }

    /// Returns the non-ignored field stored in `column`.
    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.sql_fields().find(|field| field.column() == column)
    }

    /// True if at least one key field is declared. Models without a key cannot
    /// generate an `UPDATE` statement.
    pub fn has_key(&self) -> bool {
        self.key_fields().next().is_some()
    }
}

impl ModelBuilder {
    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Verifies the declaration and freezes it.
    pub fn build(self) -> Result<Arc<Model>> {
        let model = Model {
            table_name: table_name(&self.name),
            name: self.name,
            fields: self.fields,
        };

        model.verify()?;

        debug!(
            model = model.name(),
            table = model.table_name(),
            fields = model.fields.len(),
            keys = ?model.key_fields().map(Field::column).collect::<Vec<_>>(),
            "model registered"
        );

        Ok(Arc::new(model))
    }
}
