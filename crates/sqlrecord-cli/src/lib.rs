mod config;
mod expired;
mod record;
mod sql;

pub use config::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlrecord_core::{Model, Schema};
use std::{ffi::OsString, io::Write, path::PathBuf, sync::Arc};

/// sqlrecord CLI library, usable with a schema built in code or loaded from a
/// schema file
#[derive(Debug, Default)]
pub struct SqlRecordCli {
    schema: Option<Schema>,
}

impl SqlRecordCli {
    /// Create a CLI that loads tables from the `--schema` file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CLI over `schema`. A `--schema` file still takes precedence.
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli, &mut std::io::stdout().lock())
    }

    /// Parse and execute CLI commands from an iterator of arguments, writing
    /// output to `out`
    pub fn parse_from<I, T>(&self, args: I, out: &mut impl Write) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli, out)
    }

    fn run(&self, cli: Cli, out: &mut dyn Write) -> Result<()> {
        match cli.command {
            Command::Tables => list_tables(&self.schema(cli.schema)?, out),
            Command::Sql(cmd) => cmd.run(&self.schema(cli.schema)?, out),
            Command::Record(cmd) => cmd.run(&self.schema(cli.schema)?, out),
            Command::Expired(cmd) => cmd.run(out),
        }
    }

    fn schema(&self, path: Option<PathBuf>) -> Result<Schema> {
        match path {
            Some(path) => SchemaFile::load(path)?.build(),
            None => self
                .schema
                .clone()
                .context("no schema given; pass --schema <path> or set SQLRECORD_SCHEMA"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sqlrecord")]
#[command(about = "sqlrecord CLI - MySQL statements and record validation for declared tables")]
#[command(version)]
struct Cli {
    /// TOML file declaring the tables
    #[arg(long, global = true, env = "SQLRECORD_SCHEMA")]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the declared tables
    Tables,

    /// Print a statement for a table
    Sql(sql::SqlCommand),

    /// Build a record from a JSON object and print the values it binds
    Record(record::RecordCommand),

    /// Print the ids a prune would delete from a set of rows
    Expired(expired::ExpiredCommand),
}

fn list_tables(schema: &Schema, out: &mut dyn Write) -> Result<()> {
    for model in schema.models() {
        let keys: Vec<_> = model.key_fields().map(|field| field.column()).collect();
        writeln!(
            out,
            "{}\t{}\t{}",
            model.table_name(),
            model.name(),
            keys.join(", ")
        )?;
    }
    Ok(())
}

/// Looks a model up by table name, then by type name.
fn find_model<'a>(schema: &'a Schema, table: &str) -> Result<&'a Arc<Model>> {
    schema
        .model(table)
        .or_else(|| schema.model_by_name(table))
        .with_context(|| {
            let tables: Vec<_> = schema.models().map(|model| model.table_name()).collect();
            format!("unknown table `{table}`; declared: {}", tables.join(", "))
        })
}
