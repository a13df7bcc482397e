use super::Error;
use crate::stmt::Value;

/// Error when a field's pre-init transform rejects its input.
///
/// The transform's own error, if any, is attached as the cause.
#[derive(Debug)]
pub(super) struct TransformFailedError {
    pub(super) field: Box<str>,
    pub(super) transform: &'static str,
    pub(super) value: Value,
}

impl std::error::Error for TransformFailedError {}

impl core::fmt::Display for TransformFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "transform `{}` rejected {} for field `{}`",
            self.transform, self.value, self.field
        )
    }
}

impl Error {
    /// Creates a transform failure error.
    pub fn transform_failed(
        field: impl Into<String>,
        transform: &'static str,
        value: Value,
    ) -> Error {
        Error::from(super::ErrorKind::TransformFailed(TransformFailedError {
            field: field.into().into(),
            transform,
            value,
        }))
    }

    /// Returns `true` if this error is a transform failure.
    pub fn is_transform_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TransformFailed(_))
    }
}
