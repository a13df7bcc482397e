use super::{Formatter, ToSql};

use sqlrecord_core::schema::Field;

/// How value placeholders are written into statement text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `:field`, bound by name.
    #[default]
    Named,

    /// `?`, bound by position in [`Statement::params`](crate::Statement::params).
    Positional,
}

/// The placeholder binding a field's value.
pub(super) struct Placeholder<'a>(pub(super) &'a Field);

impl ToSql for Placeholder<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.params.push(self.0.name.clone());

        match f.serializer.style {
            ParamStyle::Named => {
                f.dst.push(':');
                f.dst.push_str(&self.0.name);
            }
            ParamStyle::Positional => f.dst.push('?'),
        }
    }
}
