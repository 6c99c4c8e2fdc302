use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - a to-do list that forgets"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON (`run` only)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start the TUI with this task already added (repeatable)
    #[arg(long = "add", value_name = "TITLE")]
    pub add: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a command script against an empty list and print the result
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Reject flags the chosen surface would ignore: `--json` without a
    /// subcommand, `--add` with one.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.command.is_none() && self.json {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--json only applies to `tick run`",
            ));
        }
        if self.command.is_some() && !self.add.is_empty() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--add only applies to the interactive list",
            ));
        }
        Ok(())
    }
}
