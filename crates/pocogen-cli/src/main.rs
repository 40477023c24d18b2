//! pocogen CLI - Generate a C# POCO class from a SQL Server table
//!
//! Usage:
//! - `pocogen users -c "Server=...;Database=...;"` - print the class for `users`
//! - `pocogen users -c ... -_` - keep underscores in identifiers
//! - `pocogen users -c ... --class-name Account` - override the class name
//!
//! The connection string may also come from `POCOGEN_CONNSTR` or from a
//! `pocogen.toml` config file.

use anyhow::Context;
use clap::{ArgAction, Parser};
use pocogen_core::{GenError, NameConverter, TypeMap, emit_class};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod logging;
mod schema;

use config::{ConfigFile, Settings};
use schema::SchemaReader;

#[derive(Parser, Debug)]
#[command(name = "pocogen")]
#[command(author, version, about = "Generate a C# POCO class from a SQL Server table", long_about = None)]
pub(crate) struct Cli {
    /// Name of the table to generate a class for
    pub(crate) table: String,

    /// Connection string (ADO.NET format)
    #[arg(short, long, env = "POCOGEN_CONNSTR", hide_env_values = true)]
    pub(crate) connstr: Option<String>,

    /// Keep underscores in generated identifiers
    #[arg(
        short = '_',
        long = "retain-underscores",
        overrides_with = "no_retain_underscores"
    )]
    pub(crate) retain_underscores: bool,

    /// Drop underscores even if the config file retains them
    #[arg(long, overrides_with = "retain_underscores")]
    pub(crate) no_retain_underscores: bool,

    /// Class name to use instead of the converted table name
    #[arg(long)]
    pub(crate) class_name: Option<String>,

    /// Only look for the table in this schema (e.g., dbo)
    #[arg(short, long)]
    pub(crate) schema: Option<String>,

    /// Wrap the class in this namespace
    #[arg(short, long)]
    pub(crate) namespace: Option<String>,

    /// Emit using directives for the annotation attributes
    #[arg(long, overrides_with = "no_usings")]
    pub(crate) usings: bool,

    /// Omit using directives even if the config file enables them
    #[arg(long, overrides_with = "usings")]
    pub(crate) no_usings: bool,

    /// Path to config file (default: ./pocogen.toml if present)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Generation failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = ConfigFile::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, file)?;
    tracing::debug!(
        table = %settings.table,
        schema = ?settings.schema,
        retain_underscores = settings.retain_underscores,
        "Resolved settings"
    );

    let reader = SchemaReader::from_connection_string(&settings.connection_string)
        .context("Invalid connection string")?;
    let columns = reader
        .fetch_columns(&settings.table, settings.schema.as_deref())
        .await
        .with_context(|| format!("Failed to read schema for table '{}'", settings.table))?;

    let names = NameConverter::new(settings.retain_underscores);
    let output = emit_class(
        &settings.table,
        &columns,
        TypeMap::global(),
        &names,
        &settings.emit,
    )?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write generated class")?;

    Ok(())
}

/// Exit status for a failure: the [`GenError`] code if there is one, else 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GenError>().map_or(1, GenError::exit_code)
}
