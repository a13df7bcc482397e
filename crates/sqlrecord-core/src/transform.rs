//! Named pre-init transforms.
//!
//! A transform replaces a field's default type coercion. It receives the raw
//! input value and either returns the value to store or fails; a failure is
//! reported to the caller as a transform error naming the field and the raw
//! value, with the transform's own error as the cause.

use crate::{bail, stmt::Value, Result};

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use std::fmt;

/// A named function applied to a field's raw input value.
#[derive(Clone, Copy)]
pub struct Transform {
    name: &'static str,
    func: fn(&Value) -> Result<Value>,
}

/// Parses datetimes from epoch milliseconds or `YYYY-MM-DD HH:MM:SS` text.
pub const DATETIME: Transform = Transform::new("datetime", parse_datetime);

/// Drops the input and always yields null.
pub const DISCARD: Transform = Transform::new("discard", discard);

const BUILTIN: &[Transform] = &[DATETIME, DISCARD];

impl Transform {
    pub const fn new(name: &'static str, func: fn(&Value) -> Result<Value>) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, value: &Value) -> Result<Value> {
        (self.func)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

/// Finds a built-in transform by name.
pub fn lookup(name: &str) -> Option<Transform> {
    BUILTIN.iter().find(|t| t.name == name).copied()
}

/// Parses a datetime.
///
/// Integers and all-digit strings are read as milliseconds since the Unix
/// epoch and converted to UTC wall-clock time. Other strings must match
/// `YYYY-MM-DD HH:MM:SS`. Datetimes are returned unchanged.
pub fn parse_datetime(value: &Value) -> Result<Value> {
    match value {
        Value::DateTime(_) => Ok(value.clone()),
        Value::I64(millis) => from_epoch_millis(*millis),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            from_epoch_millis(s.parse()?)
        }
        Value::String(s) => match DateTime::strptime(crate::stmt::DATETIME_FORMAT, s) {
            Ok(datetime) => Ok(Value::DateTime(datetime)),
            Err(_) => bail!("no valid date format found for {value}"),
        },
        _ => bail!("no valid date format found for {value}"),
    }
}

fn from_epoch_millis(millis: i64) -> Result<Value> {
    let timestamp = Timestamp::from_millisecond(millis)
        .map_err(|err| crate::err!("not a valid epoch millis date for {millis}: {err}"))?;
    Ok(Value::DateTime(timestamp.to_zoned(TimeZone::UTC).datetime()))
}

/// Ignores the input.
pub fn discard(_: &Value) -> Result<Value> {
    Ok(Value::Null)
}
