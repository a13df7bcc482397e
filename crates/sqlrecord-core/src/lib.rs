mod error;
pub use error::{Error, IntoError};

pub mod record;
pub use record::{Input, Record};

pub mod schema;
pub use schema::{Model, Schema};

pub mod stmt;

pub mod transform;
pub use transform::Transform;

/// A Result type alias that uses sqlrecord's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
