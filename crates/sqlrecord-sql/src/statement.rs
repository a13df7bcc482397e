use sqlrecord_core::{bail, stmt::Value, Record, Result};

use std::fmt;

/// Serialized SQL text along with the fields its placeholders bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<String>,
}

impl Statement {
    pub(crate) fn new(sql: String, params: Vec<String>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn into_sql(self) -> String {
        self.sql
    }

    /// Field names bound by each placeholder, in statement order. A field may
    /// appear more than once.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns the record values for each placeholder, in statement order.
    pub fn bind(&self, record: &Record) -> Result<Vec<Value>> {
        self.params
            .iter()
            .map(|name| match record.get(name) {
                Some(value) => Ok(value.clone()),
                None => bail!(
                    "record of `{}` has no field `{name}` to bind",
                    record.model().name()
                ),
            })
            .collect()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
