//! Main CLI application structure

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use super::command::Command;
use super::dispatch::Request;
use super::help;
use super::output::Output;
use crate::storage::{Config, Database};

#[derive(Parser)]
#[command(name = "nodo")]
#[command(author, about = "The simple command line task manager")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path to the task database
    #[arg(long, env = "NODO_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Action and its arguments, e.g. `add Groceries "Buy milk"`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load();

    let wants_color = config.as_ref().map_or(true, |config| config.color);
    let color = wants_color && !cli.no_color && io::stdout().is_terminal();
    let output = Output::new(io::stdout().lock(), color, cli.verbose);

    output.verbose("nodo starting");

    execute(cli.args, || config, cli.db.as_deref(), output)
}

/// Runs one command line against the configured database
///
/// Help, version and unknown commands are answered before the configuration
/// is used or the database is opened.
pub fn execute<W, F>(
    args: Vec<String>,
    load_config: F,
    db_override: Option<&Path>,
    mut output: Output<W>,
) -> Result<ExitCode>
where
    W: Write,
    F: FnOnce() -> Result<Config>,
{
    match Request::parse(args) {
        Request::Help => help::show_help(&mut output)?,
        Request::Version => help::show_version(&mut output, Config::VERSION)?,
        Request::Unknown(name) => {
            output.verbose_ctx("dispatch", &format!("Unknown command '{}', showing help", name));
            help::show_help(&mut output)?
        }
        Request::Invoke(action, resolved) => {
            let config = load_config()?;
            let path = config.database_path(db_override)?;
            output.verbose_ctx("db", &format!("Opening database at: {}", path.display()));

            let db = Database::open(&path, &config.default_list)
                .with_context(|| format!("Failed to open database: {}", path.display()))?;

            let mut command = Command::new(&db, &db, config.default_list.as_str(), output);
            command.dispatch(action, &resolved)?;
            output = command.into_output();
        }
    }

    output.verbose("Command completed");
    output.into_inner()?;

    Ok(ExitCode::SUCCESS)
}
