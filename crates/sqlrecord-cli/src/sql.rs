use anyhow::Result;
use clap::{Parser, ValueEnum};
use sqlrecord_core::Schema;
use sqlrecord_sql::{ParamStyle, Serializer};
use std::io::Write;

#[derive(Parser, Debug)]
pub struct SqlCommand {
    /// Table name or type name
    table: String,

    /// Statement to print
    #[arg(value_enum)]
    kind: StatementKind,

    /// Retention window of `prune`, in days
    #[arg(long, default_value_t = 180)]
    days: u32,

    /// Date column `prune` thins on, `created` when omitted
    #[arg(long)]
    column: Option<String>,

    /// How value placeholders are written
    #[arg(long, value_enum, default_value_t = Style::Named)]
    style: Style,

    /// Also print the field bound by each placeholder
    #[arg(long)]
    params: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StatementKind {
    Create,
    Insert,
    Update,
    Delete,
    Drop,
    Prune,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// `:field`
    Named,
    /// `?`
    Positional,
}

impl From<Style> for ParamStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Named => ParamStyle::Named,
            Style::Positional => ParamStyle::Positional,
        }
    }
}

impl SqlCommand {
    pub(crate) fn run(self, schema: &Schema, out: &mut dyn Write) -> Result<()> {
        let model = crate::find_model(schema, &self.table)?;
        let serializer = Serializer::mysql(model).param_style(self.style.into());

        let stmt = match self.kind {
            StatementKind::Create => serializer.create_table(),
            StatementKind::Insert => serializer.insert(),
            StatementKind::Update => serializer.update()?,
            StatementKind::Delete => serializer.delete(),
            StatementKind::Drop => serializer.drop_table(),
            StatementKind::Prune => match &self.column {
                Some(column) => serializer.prune_by(self.days, column)?,
                None => serializer.prune(self.days)?,
            },
        };

        writeln!(out, "{stmt}")?;

        if self.params && !stmt.params().is_empty() {
            writeln!(out, "-- params: {}", stmt.params().join(", "))?;
        }

        Ok(())
    }
}
