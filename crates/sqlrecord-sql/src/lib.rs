pub mod retention;
pub use retention::Retention;

pub mod serializer;
pub use serializer::{ParamStyle, Serializer};

mod statement;
pub use statement::Statement;
