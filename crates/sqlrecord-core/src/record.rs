use crate::{
    schema::{Field, InputKeys, Model},
    stmt::Value,
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

/// An untyped input mapping, e.g. one parsed CSV or JSON row.
pub type Input = IndexMap<String, Value>;

/// A validated set of field values conforming to a [`Model`].
///
/// Records are only created by [`Record::construct`] and are immutable. Values
/// are stored in field declaration order.
#[derive(Debug, Clone)]
pub struct Record {
    model: Arc<Model>,
    values: Vec<Value>,
}

impl Record {
    /// Builds a record of `model` from a raw input mapping.
    ///
    /// Fields are processed in declaration order. For each field the input key
    /// is resolved (see [`InputKeys`]); the raw value then goes through the
    /// field's transform if it has one, or is cast to the field's type when its
    /// kind differs. A failing transform or cast aborts construction. Once every
    /// field is processed, unresolved fields take their default, and a required
    /// field without a value is reported as missing.
    pub fn construct(model: &Arc<Model>, input: &Input) -> Result<Record> {
        let keys = InputKeys::new(input);
        let mut resolved = Vec::with_capacity(model.fields().len());

        for field in model.fields() {
            let raw = keys.resolve(field).and_then(|key| input.get(key));
            let value = raw.map(|raw| coerce(field, raw)).transpose()?;

            trace!(field = field.name.as_str(), found = value.is_some(), "resolved field");
            resolved.push(value);
        }

        let mut values = Vec::with_capacity(resolved.len());

        for (field, value) in model.fields().iter().zip(resolved) {
            match (value, &field.default) {
                (Some(value), _) => values.push(value),
                (None, Some(default)) => values.push(default.clone()),
                (None, None) => {
                    return Err(Error::missing_field(
                        &field.name,
                        input.keys().map(String::as_str),
                    ))
                }
            }
        }

        Ok(Record {
            model: model.clone(),
            values,
        })
    }

    /// Builds a record from a JSON object.
    pub fn from_json(model: &Arc<Model>, json: &serde_json::Value) -> Result<Record> {
        let Some(object) = json.as_object() else {
            crate::bail!("{}: expected a JSON object, found {json}", model.name());
        };

        let input: Input = object
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.clone())))
            .collect();

        Record::construct(model, &input)
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// Returns the value of the field `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model.field_index(name).map(|index| &self.values[index])
    }

    /// Values in field declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterates fields together with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &Value)> + '_ {
        self.model.fields().iter().zip(&self.values)
    }

    /// Re-expresses the record as an input mapping keyed by field name.
    ///
    /// Constructing a record from the result yields an equal record, unless a
    /// field's transform does not accept its own output.
    pub fn to_input(&self) -> Input {
        self.iter()
            .map(|(field, value)| (field.name.clone(), value.clone()))
            .collect()
    }

    /// Values to bind when executing an `INSERT` or `UPDATE`, keyed by field
    /// name. Ignored fields are left out.
    pub fn params(&self) -> IndexMap<String, Value> {
        self.iter()
            .filter(|(field, _)| !field.ignore)
            .map(|(field, value)| (field.name.clone(), value.clone()))
            .collect()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        (Arc::ptr_eq(&self.model, &other.model) || self.model.name() == other.model.name())
            && self.values == other.values
    }
}

fn coerce(field: &Field, raw: &Value) -> Result<Value> {
    if let Some(transform) = &field.transform {
        return transform.apply(raw).map_err(|cause| {
            cause.context(Error::transform_failed(
                &field.name,
                transform.name(),
                raw.clone(),
            ))
        });
    }

    if raw.is_null() || field.ty.is_a(raw) {
        return Ok(raw.clone());
    }

    field
        .ty
        .cast(raw)
        .ok_or_else(|| Error::coercion(&field.name, raw.clone(), field.ty))
}
