//! Line-oriented command scripts replayed against a [`TaskStore`].
//!
//! ```text
//! add Buy milk
//! toggle 1
//! edit 1 Buy oat milk
//! remove 1 yes
//! list
//! ```

use crate::model::task::{Task, TaskId};
use crate::ops::task_store::{AddError, TaskStore};

/// Error type for script parsing
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },
    #[error("line {line}: invalid task id '{value}'")]
    InvalidId { line: usize, value: String },
    #[error("line {line}: expected yes or no, got '{value}'")]
    InvalidAnswer { line: usize, value: String },
    #[error("could not read script: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(String),
    Toggle(TaskId),
    Edit { id: TaskId, title: String },
    /// `confirm` is the answer given to the removal prompt
    Remove { id: TaskId, confirm: bool },
    List,
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: ScriptCommand,
}

/// What applying one command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(TaskId),
    Rejected(AddError),
    Toggled { id: TaskId, found: bool },
    Edited { id: TaskId, found: bool },
    Removed { id: TaskId, task: Option<Task> },
    Declined(TaskId),
    Listed,
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(command) = parse_line(raw, idx + 1)? {
            steps.push(ScriptStep {
                line: idx + 1,
                command,
            });
        }
    }
    Ok(steps)
}

/// Parse one line. Returns None for blank and comment lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<ScriptCommand>, ScriptError> {
    let text = raw.trim_start();
    if text.trim_end().is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = split_word(text);

    let command = match word {
        "add" => {
            if rest.trim().is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "add",
                    what: "a title",
                });
            }
            ScriptCommand::Add(rest.to_string())
        }
        "toggle" => ScriptCommand::Toggle(parse_id(rest.trim(), line, "toggle")?),
        "edit" => {
            let (id, title) = split_word(rest.trim_start());
            ScriptCommand::Edit {
                id: parse_id(id, line, "edit")?,
                title: title.to_string(),
            }
        }
        "remove" => {
            let (id, answer) = split_word(rest.trim_start());
            let confirm = match answer.trim() {
                "" | "yes" | "y" => true,
                "no" | "n" => false,
                other => {
                    return Err(ScriptError::InvalidAnswer {
                        line,
                        value: other.to_string(),
                    });
                }
            };
            ScriptCommand::Remove {
                id: parse_id(id, line, "remove")?,
                confirm,
            }
        }
        "list" => ScriptCommand::List,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Apply one command to the store
pub fn apply(store: &mut TaskStore, command: &ScriptCommand) -> Outcome {
    match command {
        ScriptCommand::Add(title) => match store.add_task(title) {
            Ok(id) => Outcome::Added(id),
            Err(e) => Outcome::Rejected(e),
        },
        ScriptCommand::Toggle(id) => Outcome::Toggled {
            id: *id,
            found: store.toggle_task_done(*id),
        },
        ScriptCommand::Edit { id, title } => Outcome::Edited {
            id: *id,
            found: store.edit_task(*id, title),
        },
        ScriptCommand::Remove { id, confirm: true } => Outcome::Removed {
            id: *id,
            task: store.remove_task(*id),
        },
        ScriptCommand::Remove { id, confirm: false } => Outcome::Declined(*id),
        ScriptCommand::List => Outcome::Listed,
    }
}

/// Split off the first word. The rest starts after the single separator and
/// is otherwise kept as typed, since titles match exactly.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn parse_id(value: &str, line: usize, command: &'static str) -> Result<TaskId, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            what: "a task id",
        });
    }
    value.parse().map_err(|_| ScriptError::InvalidId {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_all_commands() {
        let steps = parse_script(
            "# groceries\n\nadd Buy  milk\ntoggle 1\nedit 1 Buy oat milk\nedit 1\nremove 1 no\nremove 1\nlist\n",
        )
        .unwrap();
        let commands: Vec<ScriptCommand> = steps.iter().map(|s| s.command.clone()).collect();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Add("Buy  milk".into()),
                ScriptCommand::Toggle(TaskId(1)),
                ScriptCommand::Edit {
                    id: TaskId(1),
                    title: "Buy oat milk".into()
                },
                ScriptCommand::Edit {
                    id: TaskId(1),
                    title: String::new()
                },
                ScriptCommand::Remove {
                    id: TaskId(1),
                    confirm: false
                },
                ScriptCommand::Remove {
                    id: TaskId(1),
                    confirm: true
                },
                ScriptCommand::List,
            ]
        );
        assert_eq!(steps[0].line, 3);
    }

    #[test]
    fn test_titles_keep_their_whitespace() {
        let steps = parse_script("add Buy milk \nadd Buy milk\n  edit  2  Walk dog \n").unwrap();
        let commands: Vec<ScriptCommand> = steps.iter().map(|s| s.command.clone()).collect();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Add("Buy milk ".into()),
                ScriptCommand::Add("Buy milk".into()),
                ScriptCommand::Edit {
                    id: TaskId(2),
                    title: " Walk dog ".into()
                },
            ]
        );

        let mut store = TaskStore::new();
        for step in &steps[..2] {
            assert!(matches!(apply(&mut store, &step.command), Outcome::Added(_)));
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_whitespace_only_add_needs_a_title() {
        let err = parse_script("add    ").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'add' needs a title");
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_script("add a\nfrobnicate 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown command 'frobnicate'");

        let err = parse_script("toggle one").unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid task id 'one'");

        let err = parse_script("\nadd").unwrap_err();
        assert_eq!(err.to_string(), "line 2: 'add' needs a title");

        let err = parse_script("remove").unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'remove' needs a task id");

        let err = parse_script("remove 1 maybe").unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected yes or no, got 'maybe'");
    }

    #[test]
    fn test_apply_scenario() {
        let mut store = TaskStore::new();
        let add = ScriptCommand::Add("Buy milk".into());
        assert_eq!(apply(&mut store, &add), Outcome::Added(TaskId(1)));
        assert_eq!(
            apply(&mut store, &add),
            Outcome::Rejected(AddError::DuplicateTitle("Buy milk".into()))
        );
        assert_eq!(
            apply(&mut store, &ScriptCommand::Toggle(TaskId(1))),
            Outcome::Toggled {
                id: TaskId(1),
                found: true
            }
        );
        assert_eq!(
            apply(
                &mut store,
                &ScriptCommand::Remove {
                    id: TaskId(1),
                    confirm: false
                }
            ),
            Outcome::Declined(TaskId(1))
        );
        assert_eq!(store.len(), 1);
        let outcome = apply(
            &mut store,
            &ScriptCommand::Remove {
                id: TaskId(1),
                confirm: true,
            },
        );
        assert!(matches!(outcome, Outcome::Removed { task: Some(_), .. }));
        assert!(store.is_empty());
    }
}
