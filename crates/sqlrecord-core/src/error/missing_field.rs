use super::Error;

/// Error when a required field has no value in the input mapping.
#[derive(Debug)]
pub(super) struct MissingFieldError {
    pub(super) field: Box<str>,

    /// Keys actually present in the input, for diagnostics.
    pub(super) present: Box<[String]>,
}

impl std::error::Error for MissingFieldError {}

impl core::fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing required field `{}`; input keys: {}",
            self.field,
            self.present.join(", ")
        )
    }
}

impl Error {
    /// Creates a missing field error.
    ///
    /// `present` lists the keys the input mapping did contain.
    pub fn missing_field<I>(field: impl Into<String>, present: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(super::ErrorKind::MissingField(MissingFieldError {
            field: field.into().into(),
            present: present.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a missing field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingField(_))
    }
}
