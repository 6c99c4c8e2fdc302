use tracing::{debug, info};

use crate::model::task::{Task, TaskId};

/// Error type for adding tasks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// Hands out task ids. Ids only ever grow, so a removed id is never reused.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

// ---------------------------------------------------------------------------
// List transformations (old list in, new list out)

/// The list with `task` appended
pub fn with_task_added(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(task);
    next
}

/// The list with the matching task's `done` flag flipped
pub fn with_done_toggled(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    done: !task.done,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// The list with the matching task's title replaced
pub fn with_title_replaced(tasks: &[Task], id: TaskId, title: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    title: title.to_string(),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// The list without the matching task
pub fn without_task(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

// ---------------------------------------------------------------------------
// Store

/// Owner of the task list. The four mutating operations are the only way the
/// list changes; each swaps in a freshly built list.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
    revision: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Bumped by one on every operation that changed the list
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Exact, case-sensitive title match
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Append a new task. Rejected without mutation if the title is taken.
    pub fn add_task(&mut self, title: &str) -> Result<TaskId, AddError> {
        if self.contains_title(title) {
            debug!(title, "rejected duplicate title");
            return Err(AddError::DuplicateTitle(title.to_string()));
        }
        let id = self.ids.next_id();
        self.replace(with_task_added(&self.tasks, Task::new(id, title)));
        info!(%id, title, "task added");
        Ok(id)
    }

    /// Flip `done` on the task. Unknown ids are ignored.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            debug!(%id, "toggle: no such task");
            return false;
        }
        self.replace(with_done_toggled(&self.tasks, id));
        debug!(%id, "task toggled");
        true
    }

    /// Replace the task's title. No duplicate check; empty titles are kept
    /// as given. Unknown ids are ignored.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool {
        if self.get(id).is_none() {
            debug!(%id, "edit: no such task");
            return false;
        }
        self.replace(with_title_replaced(&self.tasks, id, new_title));
        debug!(%id, title = new_title, "task edited");
        true
    }

    /// Delete the task and hand it back. Callers confirm with the user first.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.get(id).cloned()?;
        self.replace(without_task(&self.tasks, id));
        info!(%id, "task removed");
        Some(removed)
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.revision += 1;
    }
}
