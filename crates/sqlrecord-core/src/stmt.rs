mod ty;
pub(crate) use ty::DATETIME_FORMAT;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_json;
