use super::{Formatter, ToSql};

/// A backtick-quoted identifier.
#[derive(Clone, Copy)]
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('`');
        for ch in self.0.as_ref().chars() {
            if ch == '`' {
                f.dst.push('`');
            }
            f.dst.push(ch);
        }
        f.dst.push('`');
    }
}
