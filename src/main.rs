use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::handlers;
use ticklist::io::config_io::load_config;
use ticklist::io::logging::{LogTarget, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }

    // The TUI owns the terminal, so its logs go to a file
    let target = if cli.command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = init_logging(target) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = ticklist::tui::run(&config, &cli.add) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
