use sqlrecord_core::{schema::Field, stmt::Type};

/// The column type of a field: its override, or the default for its type.
pub(super) fn column_type(field: &Field) -> &str {
    if let Some(ty) = &field.column_type {
        return ty;
    }

    match field.ty {
        Type::Text => "VARCHAR(255)",
        Type::Integer => "INT",
        Type::Float => "FLOAT(20,4)",
        Type::DateTime => "DATETIME",
        Type::Date => "DATE",
        Type::Boolean => "BOOLEAN DEFAULT FALSE",
    }
}
