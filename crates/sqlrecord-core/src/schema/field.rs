use crate::{
    stmt::{Type, Value},
    Transform,
};

/// Static metadata describing one field of a [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct Field {
    /// The field name, unique within the model.
    pub name: String,

    /// Semantic type raw input values are coerced to.
    pub ty: Type,

    /// Value used when the input has no entry for the field. `None` makes the
    /// field required.
    pub default: Option<Value>,

    /// Explicit input key, used verbatim instead of name-based matching.
    pub source_key: Option<String>,

    /// Column name override.
    pub column_name: Option<String>,

    /// Column type override, emitted as-is in `CREATE TABLE`.
    pub column_type: Option<String>,

    /// True if the field is part of the table's unique key.
    pub key: bool,

    /// True if the field is kept on the record but left out of every statement.
    pub ignore: bool,

    /// Replaces the default type coercion for this field.
    pub transform: Option<Transform>,

    /// Column in another table whose row `id` is stored instead of the value.
    pub foreign_key: Option<ForeignKey>,
}

/// Reference to a column of another table, resolved to that row's `id` when
/// inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

impl Field {
    /// Creates a required field.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            source_key: None,
            column_name: None,
            column_type: None,
            key: false,
            ignore: false,
            transform: None,
            foreign_key: None,
        }
    }

    /// Makes the field optional, defaulting to null.
    pub fn optional(self) -> Self {
        self.default(Value::Null)
    }

    /// Makes the field optional with the given default.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = Some(key.into());
        self
    }

    pub fn column_name(mut self, name: impl Into<String>) -> Self {
        self.column_name = Some(name.into());
        self
    }

    pub fn column_type(mut self, ty: impl Into<String>) -> Self {
        self.column_type = Some(ty.into());
        self
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn foreign_key(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_key = Some(ForeignKey {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    /// True if construction fails when the input has no value for the field.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// The name of the column storing this field.
    pub fn column(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }
}
