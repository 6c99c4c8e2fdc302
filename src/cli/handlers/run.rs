use std::fs;
use std::io::Read;

use tracing::{debug, warn};

use crate::cli::commands::RunArgs;
use crate::cli::output::*;
use crate::ops::script::{self, Outcome, ScriptError};
use crate::ops::task_store::TaskStore;

/// `tick run`: replay a script against an empty list
pub fn cmd_run(args: RunArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(ScriptError::Io)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(ScriptError::Io)?;
            buf
        }
    };

    let steps = script::parse_script(&text)?;
    debug!(steps = steps.len(), "script parsed");

    let mut store = TaskStore::new();
    for step in &steps {
        match script::apply(&mut store, &step.command) {
            Outcome::Rejected(e) => {
                warn!(line = step.line, "{}", e);
                eprintln!("line {}: {}", step.line, e);
            }
            Outcome::Toggled { id, found: false }
            | Outcome::Edited { id, found: false }
            | Outcome::Removed { id, task: None } => {
                debug!(line = step.line, %id, "no task with this id");
            }
            Outcome::Declined(id) => {
                debug!(line = step.line, %id, "removal declined");
            }
            Outcome::Listed => print_list(&store, json)?,
            _ => {}
        }
    }

    print_list(&store, json)
}

fn print_list(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&task_list_to_json(store.tasks()))?
        );
    } else {
        println!("{}", format_task_list(store.tasks()));
    }
    Ok(())
}
