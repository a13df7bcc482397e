mod adhoc;
mod coercion;
mod invalid_schema;
mod missing_field;
mod transform_failed;

use adhoc::AdhocError;
use coercion::CoercionError;
use invalid_schema::InvalidSchema;
use missing_field::MissingFieldError;
use std::sync::Arc;
use transform_failed::TransformFailedError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while declaring a schema, constructing a record,
/// or generating a statement.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let inner = err.inner.take().map(|inner| match Arc::try_unwrap(inner) {
            Ok(mut inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.cause = Some(self);
                inner
            }
            // A shared consequent is wrapped rather than mutated.
            Err(shared) => ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
                cause: Some(self),
            },
        });

        Error {
            inner: inner.map(Arc::new),
        }
    }

    /// Returns the error that caused this one, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    /// Returns the name of the field a record-scoped error refers to.
    pub fn field_name(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::MissingField(err) => Some(&*err.field),
            ErrorKind::Coercion(err) => Some(&*err.field),
            ErrorKind::TransformFailed(err) => Some(&*err.field),
            _ => None,
        }
    }

    /// Returns the raw input value a coercion or transform rejected.
    pub fn value(&self) -> Option<&crate::stmt::Value> {
        match self.kind() {
            ErrorKind::Coercion(err) => Some(&err.value),
            ErrorKind::TransformFailed(err) => Some(&err.value),
            _ => None,
        }
    }

    /// Returns the keys present in the input when a required field was missing.
    pub fn input_keys(&self) -> Option<&[String]> {
        match self.kind() {
            ErrorKind::MissingField(err) => Some(&*err.present),
            _ => None,
        }
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self.cause().map(|cause| cause as _),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    MissingField(MissingFieldError),
    Coercion(CoercionError),
    TransformFailed(TransformFailedError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MissingField(err) => core::fmt::Display::fmt(err, f),
            Coercion(err) => core::fmt::Display::fmt(err, f),
            TransformFailed(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown sqlrecord error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
