use super::{ty::DATETIME_FORMAT, Value};

/// Converts a parsed JSON value into a raw input value.
///
/// Numbers become `I64` when they fit, `F64` otherwise. Arrays and objects
/// have no scalar counterpart and are kept as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(v),
            Json::Number(v) => match v.as_i64() {
                Some(v) => Value::I64(v),
                None => v.as_f64().map(Value::F64).unwrap_or(Value::Null),
            },
            Json::String(v) => Value::String(v),
            v @ (Json::Array(_) | Json::Object(_)) => Value::String(v.to_string()),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(*v),
            Value::I64(v) => Json::from(*v),
            Value::F64(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::String(v) => Json::String(v.clone()),
            Value::DateTime(v) => Json::String(v.strftime(DATETIME_FORMAT).to_string()),
            Value::Date(v) => Json::String(v.to_string()),
        }
    }
}
