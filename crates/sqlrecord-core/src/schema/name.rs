use super::Field;
use crate::{stmt::Value, Input};
use indexmap::IndexMap;

/// Derives a table name from a PascalCase type name.
///
/// Each uppercase letter becomes `_` followed by its lowercase form, then
/// leading and trailing underscores are stripped: `OrdersMonthly` becomes
/// `orders_monthly`.
pub fn table_name(type_name: &str) -> String {
    let mut name = String::with_capacity(type_name.len() + 4);

    for ch in type_name.chars() {
        if ch.is_uppercase() {
            name.push('_');
            name.extend(ch.to_lowercase());
        } else {
            name.push(ch);
        }
    }

    name.trim_matches('_').to_string()
}

/// Finds the input key holding the value for `field`.
///
/// Builds a fresh key index on every call; use [`InputKeys`] when resolving
/// every field of a model against the same input.
pub fn resolve_input_key<'a>(field: &'a Field, input: &'a Input) -> Option<&'a str> {
    InputKeys::new(input).resolve(field)
}

/// Case- and space-insensitive index over the keys of an input mapping.
#[derive(Debug)]
pub struct InputKeys<'a> {
    keys: IndexMap<String, &'a str>,
}

impl<'a> InputKeys<'a> {
    pub fn new(input: &'a IndexMap<String, Value>) -> Self {
        let keys = input
            .keys()
            .map(|key| (normalize(key), key.as_str()))
            .collect();

        Self { keys }
    }

    /// Returns the input key matching `field`.
    ///
    /// A field's `source_key` is returned verbatim, whether or not the input
    /// contains it. Otherwise the field's lowercased name is looked up among the
    /// normalized input keys.
    pub fn resolve<'b>(&self, field: &'b Field) -> Option<&'b str>
    where
        'a: 'b,
    {
        if let Some(source_key) = &field.source_key {
            return Some(source_key);
        }

        self.keys.get(&field.name.to_lowercase()).copied()
    }
}

fn normalize(key: &str) -> String {
    key.replace(' ', "").to_lowercase()
}
