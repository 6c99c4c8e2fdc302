use crate::model::task::{Task, TaskId};
use crate::util::line_input::LineInput;

/// What a row asks its owner to do with the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    ToggleDone(TaskId),
    Edit { id: TaskId, title: String },
    /// Needs user confirmation before it reaches the store
    Remove(TaskId),
}

/// Whether a row's toggle gesture still works while the row is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingTogglePolicy {
    #[default]
    Allow,
    Block,
}

impl EditingTogglePolicy {
    pub fn from_flag(toggle_while_editing: bool) -> Self {
        if toggle_while_editing {
            EditingTogglePolicy::Allow
        } else {
            EditingTogglePolicy::Block
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    Editing,
}

/// Interaction state of one visible task row: the edit session and its draft.
#[derive(Debug, Clone)]
pub struct ItemController {
    task_id: TaskId,
    state: RowState,
    draft: LineInput,
    focus_requested: bool,
}

impl ItemController {
    /// Mount a row for `task`: viewing, draft holding the current title
    pub fn new(task: &Task) -> Self {
        ItemController {
            task_id: task.id,
            state: RowState::Viewing,
            draft: LineInput::with_text(&task.title),
            focus_requested: false,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == RowState::Editing
    }

    pub fn draft(&self) -> &LineInput {
        &self.draft
    }

    /// The draft, only while editing
    pub fn draft_mut(&mut self) -> Option<&mut LineInput> {
        if self.is_editing() {
            Some(&mut self.draft)
        } else {
            None
        }
    }

    /// Consume a pending focus request (the renderer places the caret once)
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Keep the draft in step with the task while not editing
    pub fn sync(&mut self, task: &Task) {
        if !self.is_editing() && self.draft.text() != task.title {
            self.draft.set(&task.title);
        }
    }

    /// Viewing → Editing. The draft starts from the current title.
    pub fn start_editing(&mut self, task: &Task) {
        if self.is_editing() {
            return;
        }
        self.draft.set(&task.title);
        self.state = RowState::Editing;
        self.focus_requested = true;
    }

    /// Editing → Viewing, committing the draft even when it is unchanged
    pub fn submit_editing(&mut self) -> Option<RowIntent> {
        if !self.is_editing() {
            return None;
        }
        self.state = RowState::Viewing;
        self.focus_requested = false;
        Some(RowIntent::Edit {
            id: self.task_id,
            title: self.draft.text().to_string(),
        })
    }

    /// Editing → Viewing, discarding the draft
    pub fn cancel_editing(&mut self, task: &Task) {
        self.draft.set(&task.title);
        self.state = RowState::Viewing;
        self.focus_requested = false;
    }

    /// Focus left the row's input. Same as cancelling.
    pub fn blur(&mut self, task: &Task) {
        if self.is_editing() {
            self.cancel_editing(task);
        }
    }

    pub fn toggle_done(&self, policy: EditingTogglePolicy) -> Option<RowIntent> {
        if self.is_editing() && policy == EditingTogglePolicy::Block {
            return None;
        }
        Some(RowIntent::ToggleDone(self.task_id))
    }

    /// Remove is disabled while editing
    pub fn request_remove(&self) -> Option<RowIntent> {
        if self.is_editing() {
            None
        } else {
            Some(RowIntent::Remove(self.task_id))
        }
    }
}
