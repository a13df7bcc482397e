use anyhow::{bail, Context, Result};
use clap::Parser;
use jiff::{
    civil::{Date, DateTime},
    Zoned,
};
use serde::Deserialize;
use sqlrecord_core::{stmt::Value, transform};
use sqlrecord_sql::Retention;
use std::{io::Write, path::PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ExpiredCommand {
    /// JSON file holding an array of `{ "id": .., "at": .. }` rows
    rows: PathBuf,

    /// Retention window, in days
    #[arg(long, default_value_t = 180)]
    days: u32,

    /// Current date, today in the system time zone when omitted
    #[arg(long)]
    today: Option<Date>,
}

#[derive(Debug, Deserialize)]
struct Row {
    id: i64,

    /// Datetime text, epoch milliseconds, or null
    #[serde(default)]
    at: serde_json::Value,
}

impl ExpiredCommand {
    /// Prints the ids of the rows a prune would delete, one per line.
    pub(crate) fn run(self, out: &mut dyn Write) -> Result<()> {
        let contents = std::fs::read_to_string(&self.rows)
            .with_context(|| format!("failed to read rows from {}", self.rows.display()))?;
        let rows: Vec<Row> = serde_json::from_str(&contents)
            .with_context(|| format!("invalid rows file {}", self.rows.display()))?;

        let rows = rows
            .into_iter()
            .map(|row| {
                let at = parse_at(row.at).with_context(|| format!("row {}", row.id))?;
                Ok((row.id, at))
            })
            .collect::<Result<Vec<_>>>()?;

        let today = self.today.unwrap_or_else(|| Zoned::now().date());
        let total = rows.len();
        let expired = Retention::new(self.days).expired(today, rows)?;

        debug!(%today, days = self.days, total, expired = expired.len(), "evaluated retention");

        for id in expired {
            writeln!(out, "{id}")?;
        }

        Ok(())
    }
}

fn parse_at(raw: serde_json::Value) -> Result<Option<DateTime>> {
    let raw = Value::from(raw);

    if raw.is_null() {
        return Ok(None);
    }

    match transform::DATETIME.apply(&raw)? {
        Value::DateTime(at) => Ok(Some(at)),
        other => bail!("expected a datetime, found {other}"),
    }
}
