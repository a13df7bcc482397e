use super::Error;
use crate::stmt::{Type, Value};

/// Error when a raw value cannot be cast to a field's type.
#[derive(Debug)]
pub(super) struct CoercionError {
    pub(super) field: Box<str>,
    pub(super) value: Value,
    pub(super) to: Type,
}

impl std::error::Error for CoercionError {}

impl core::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot coerce {} to {:?} for field `{}`",
            self.value, self.to, self.field
        )
    }
}

impl Error {
    /// Creates a coercion error.
    pub fn coercion(field: impl Into<String>, value: Value, to: Type) -> Error {
        Error::from(super::ErrorKind::Coercion(CoercionError {
            field: field.into().into(),
            value,
            to,
        }))
    }

    /// Returns `true` if this error is a coercion error.
    pub fn is_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Coercion(_))
    }
}
