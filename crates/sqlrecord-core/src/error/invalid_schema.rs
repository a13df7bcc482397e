use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - A required field is declared after a field with a default value
/// - Two fields share a name, or two columns share a column name
/// - A field collides with the reserved `id` or `created` columns
/// - A foreign key references an unknown table or column
/// - An `UPDATE` or prune statement is requested that the model cannot support
///
/// These errors are caught when a model is registered or a statement is generated,
/// never while a record is being constructed.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
