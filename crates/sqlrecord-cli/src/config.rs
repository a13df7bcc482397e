use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sqlrecord_core::{
    schema::{Field, Model},
    stmt::{Type, Value},
    transform, Error, Schema,
};
use std::{collections::HashMap, path::Path, str::FromStr, sync::Arc};
use tracing::debug;

/// Table definitions loaded from a TOML file
///
/// ```toml
/// [[tables]]
/// name = "Orders"
///
/// [[tables.fields]]
/// name = "orderNumber"
/// type = "text"
/// key = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Tables in declaration order
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

/// One record type and its table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Type name, the table name is derived from it
    pub name: String,

    /// Type name of a table declared earlier whose fields come first
    pub extends: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,

    /// One of `text`, `integer`, `float`, `boolean`, `datetime`, `date`
    #[serde(rename = "type")]
    pub ty: String,

    /// Defaults the field to null when the input has no value for it
    #[serde(default)]
    pub optional: bool,

    /// Default value, cast to the field type
    pub default: Option<toml::Value>,

    pub source_key: Option<String>,
    pub column_name: Option<String>,
    pub column_type: Option<String>,

    #[serde(default)]
    pub key: bool,

    #[serde(default)]
    pub ignore: bool,

    /// Name of a built-in transform
    pub transform: Option<String>,

    pub foreign_key: Option<ForeignKeyDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForeignKeyDef {
    pub table: String,
    pub column: String,
}

impl SchemaFile {
    /// Load table definitions from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid schema file {}", path.display()))
    }

    /// Builds and verifies the schema
    pub fn build(&self) -> Result<Schema> {
        let mut declared: HashMap<&str, Arc<Model>> = HashMap::new();
        let mut builder = Schema::builder();

        for table in &self.tables {
            let model = table.build(&declared)?;

            if declared.insert(&table.name, model.clone()).is_some() {
                bail!("table `{}` is declared more than once", table.name);
            }

            builder.model(model);
        }

        let schema = builder.build()?;
        debug!(tables = schema.len(), "schema file loaded");
        Ok(schema)
    }
}

impl FromStr for SchemaFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl TableDef {
    fn build(&self, declared: &HashMap<&str, Arc<Model>>) -> Result<Arc<Model>> {
        let mut builder = match &self.extends {
            Some(parent) => {
                let Some(parent) = declared.get(parent.as_str()) else {
                    bail!(
                        "{}: extends `{parent}`, which is not declared before it",
                        self.name
                    );
                };
                Model::extend(parent, &self.name)
            }
            None => Model::builder(&self.name),
        };

        for field in &self.fields {
            let field = field
                .build()
                .with_context(|| format!("{}: field `{}`", self.name, field.name))?;
            builder = builder.field(field);
        }

        Ok(builder.build()?)
    }
}

impl FieldDef {
    fn build(&self) -> Result<Field> {
        let Some(ty) = Type::from_name(&self.ty) else {
            return Err(Error::invalid_schema(format!("unknown type `{}`", self.ty)).into());
        };

        let mut field = Field::new(&self.name, ty);

        match &self.default {
            Some(default) => field = field.default(default_value(ty, default)?),
            None if self.optional => field = field.optional(),
            None => {}
        }

        if let Some(key) = &self.source_key {
            field = field.source_key(key);
        }

        if let Some(name) = &self.column_name {
            field = field.column_name(name);
        }

        if let Some(ty) = &self.column_type {
            field = field.column_type(ty);
        }

        if self.key {
            field = field.key();
        }

        if self.ignore {
            field = field.ignore();
        }

        if let Some(name) = &self.transform {
            let Some(transform) = transform::lookup(name) else {
                return Err(Error::invalid_schema(format!("unknown transform `{name}`")).into());
            };
            field = field.transform(transform);
        }

        if let Some(fk) = &self.foreign_key {
            field = field.foreign_key(&fk.table, &fk.column);
        }

        Ok(field)
    }
}

fn default_value(ty: Type, value: &toml::Value) -> Result<Value> {
    let raw = match value {
        toml::Value::String(v) => Value::from(v),
        toml::Value::Integer(v) => Value::I64(*v),
        toml::Value::Float(v) => Value::F64(*v),
        toml::Value::Boolean(v) => Value::Bool(*v),
        toml::Value::Datetime(v) => Value::String(v.to_string()),
        other => bail!("default must be a scalar, found {other}"),
    };

    match ty.cast(&raw) {
        Some(value) => Ok(value),
        None => bail!("default {raw} is not a valid {ty:?}"),
    }
}
