mod field;
pub use field::{Field, ForeignKey};

mod model;
pub use model::{Model, ModelBuilder};

mod name;
pub use name::{resolve_input_key, table_name, InputKeys};

mod verify;

use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Name of the surrogate primary key column every table carries.
pub const ID_COLUMN: &str = "id";

/// Name of the row creation timestamp column every table carries.
pub const CREATED_COLUMN: &str = "created";

/// The set of models known to an application, keyed by table name.
///
/// A schema is assembled once at startup and only read afterwards. Building
/// it checks that every foreign key points at a registered table.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    models: IndexMap<String, Arc<Model>>,
}

#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<Arc<Model>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the model stored in `table`.
    pub fn model(&self, table: &str) -> Option<&Arc<Model>> {
        self.models.get(table)
    }

    /// Returns the model declared with the type name `name`.
    pub fn model_by_name(&self, name: &str) -> Option<&Arc<Model>> {
        self.models.values().find(|model| model.name() == name)
    }

    /// Iterates the registered models in registration order.
    pub fn models(&self) -> impl ExactSizeIterator<Item = &Arc<Model>> + '_ {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model.
    pub fn model(&mut self, model: Arc<Model>) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut models = IndexMap::with_capacity(self.models.len());

        for model in &self.models {
            let table = model.table_name().to_string();
            if models.insert(table, model.clone()).is_some() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is registered more than once",
                    model.table_name()
                )));
            }
        }

        let schema = Schema { models };
        schema.verify()?;

        debug!(tables = schema.len(), "schema built");
        Ok(schema)
    }
}
