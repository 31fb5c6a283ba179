use std::io::Write;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::logging;
use crate::measure::{MeasureArgs, run_measure};
use crate::sessions::{SessionsArgs, run_sessions};
use crate::truncate::{TruncateArgs, run_truncate};

#[derive(Debug, Parser)]
#[command(
    name = "sift",
    about = "Match-aware truncation and highlighting for terminal list rows",
    version
)]
pub struct Cli {
    /// Emit machine-readable JSON, including errors.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Truncate one line of text around its matches.
    Truncate(TruncateArgs),

    /// Show the grapheme clusters and column widths of a string.
    Measure(MeasureArgs),

    /// Render session picker rows from a JSON file.
    Sessions(SessionsArgs),
}

/// Run against the process environment, writing to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    logging::init(&config);
    let mut out = std::io::stdout().lock();
    dispatch(cli, &config, &mut out)
}

pub fn dispatch<W: Write>(cli: Cli, config: &Config, out: &mut W) -> Result<()> {
    tracing::debug!(command = ?cli.command, json = cli.json, "dispatch");
    match &cli.command {
        Commands::Truncate(args) => run_truncate(args, config, cli.json, out),
        Commands::Measure(args) => run_measure(args, cli.json, out),
        Commands::Sessions(args) => run_sessions(args, config, cli.json, out),
    }
}
