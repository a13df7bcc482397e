use super::Value;
use jiff::civil::{Date, DateTime, Time};

/// The semantic type of a field.
///
/// Every raw input value is coerced into one of these before it is stored in
/// a [`Record`](crate::Record). The default SQL column type of a field is
/// derived from it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Text,
    Integer,
    Float,
    Boolean,
    DateTime,
    Date,
}

/// Text layout accepted for datetimes, in addition to ISO 8601.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Type {
    /// Returns `true` if `value` already has this type. `Null` is of every type.
    pub fn is_a(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (Type::Text, Value::String(_))
                | (Type::Integer, Value::I64(_))
                | (Type::Float, Value::F64(_))
                | (Type::Boolean, Value::Bool(_))
                | (Type::DateTime, Value::DateTime(_))
                | (Type::Date, Value::Date(_))
        )
    }

    /// Casts `value` to this type.
    ///
    /// Returns `None` when no conversion exists or the value does not parse.
    /// Values that already have this type are returned unchanged.
    pub fn cast(self, value: &Value) -> Option<Value> {
        if self.is_a(value) {
            return Some(value.clone());
        }

        match self {
            Type::Text => cast_text(value),
            Type::Integer => cast_integer(value),
            Type::Float => cast_float(value),
            Type::Boolean => cast_boolean(value),
            Type::DateTime => cast_datetime(value),
            Type::Date => cast_date(value),
        }
    }

    /// Parses a type name as written in schema files.
    pub fn from_name(name: &str) -> Option<Type> {
        Some(match &*name.to_ascii_lowercase() {
            "text" | "string" | "str" => Type::Text,
            "integer" | "int" => Type::Integer,
            "float" | "double" => Type::Float,
            "boolean" | "bool" => Type::Boolean,
            "datetime" => Type::DateTime,
            "date" => Type::Date,
            _ => return None,
        })
    }
}

fn cast_text(value: &Value) -> Option<Value> {
    let text = match value {
        Value::I64(v) => v.to_string(),
        // Debug keeps the fractional part of whole floats: `100.0`, not `100`
        Value::F64(v) => format!("{v:?}"),
        Value::Bool(v) => v.to_string(),
        Value::DateTime(v) => v.strftime(DATETIME_FORMAT).to_string(),
        Value::Date(v) => v.to_string(),
        _ => return None,
    };
    Some(Value::String(text))
}

fn cast_integer(value: &Value) -> Option<Value> {
    match value {
        Value::String(v) => v.trim().parse().ok().map(Value::I64),
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range
        Value::F64(v)
            if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 =>
        {
            Some(Value::I64(*v as i64))
        }
        Value::Bool(v) => Some(Value::I64(i64::from(*v))),
        _ => None,
    }
}

fn cast_float(value: &Value) -> Option<Value> {
    match value {
        Value::String(v) => v.trim().parse().ok().map(Value::F64),
        Value::I64(v) => Some(Value::F64(*v as f64)),
        _ => None,
    }
}

fn cast_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::String(v) => match &*v.trim().to_ascii_lowercase() {
            "true" | "t" | "yes" | "y" | "1" => Some(Value::Bool(true)),
            "false" | "f" | "no" | "n" | "0" => Some(Value::Bool(false)),
            _ => None,
        },
        Value::I64(0) => Some(Value::Bool(false)),
        Value::I64(1) => Some(Value::Bool(true)),
        _ => None,
    }
}

fn cast_datetime(value: &Value) -> Option<Value> {
    match value {
        Value::String(v) => {
            let v = v.trim();
            DateTime::strptime(DATETIME_FORMAT, v)
                .or_else(|_| v.parse::<DateTime>())
                .ok()
                .map(Value::DateTime)
        }
        Value::Date(v) => Some(Value::DateTime(v.to_datetime(Time::midnight()))),
        _ => None,
    }
}

fn cast_date(value: &Value) -> Option<Value> {
    match value {
        Value::String(v) => v.trim().parse::<Date>().ok().map(Value::Date),
        Value::DateTime(v) => Some(Value::Date(v.date())),
        _ => None,
    }
}
