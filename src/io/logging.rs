use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Where log lines go once logging is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file; the terminal belongs to the TUI
    File,
    Stderr,
}

/// Log file used by the TUI: `$TICKLIST_LOG_FILE` or `ticklist.log` in the temp dir
pub fn log_file_path() -> PathBuf {
    std::env::var("TICKLIST_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("ticklist.log"))
}

/// Install the tracing subscriber when `TICKLIST_LOG` holds a filter
/// (e.g. `ticklist=debug`). Without it nothing is logged.
pub fn init_logging(target: LogTarget) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match std::env::var("TICKLIST_LOG") {
        Ok(d) if !d.trim().is_empty() => d,
        _ => return Ok(()),
    };
    let filter = EnvFilter::try_new(directive)?;

    match target {
        LogTarget::File => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file_path())?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
                .map_err(|e| e.to_string())?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
