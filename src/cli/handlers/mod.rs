mod run;
pub use run::cmd_run;

use crate::cli::commands::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        Some(Commands::Run(args)) => cmd_run(args, json),
        None => Err("no subcommand given".into()),
    }
}
