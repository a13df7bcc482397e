use anyhow::{Context, Result};
use clap::Parser;
use sqlrecord_core::{Record, Schema};
use std::io::Write;

#[derive(Parser, Debug)]
pub struct RecordCommand {
    /// Table name or type name
    table: String,

    /// JSON object holding one input row
    json: String,
}

impl RecordCommand {
    /// Prints the values an insert or update would bind, keyed by field name.
    pub(crate) fn run(self, schema: &Schema, out: &mut dyn Write) -> Result<()> {
        let model = crate::find_model(schema, &self.table)?;
        let input: serde_json::Value =
            serde_json::from_str(&self.json).context("input is not valid JSON")?;

        let record = Record::from_json(model, &input)?;

        let params: serde_json::Map<_, _> = record
            .params()
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::from(value)))
            .collect();

        writeln!(out, "{}", serde_json::to_string_pretty(&params)?)?;
        Ok(())
    }
}
