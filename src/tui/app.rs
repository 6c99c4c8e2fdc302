use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::model::config::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::item_controller::{EditingTogglePolicy, ItemController, RowIntent};
use crate::ops::task_store::{AddError, TaskStore};
use crate::util::line_input::LineInput;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list
    Navigate,
    /// Typing in the new-task bar
    Add,
    /// A row is in its edit session
    Edit,
    /// Remove confirmation dialog is open
    Confirm,
    /// Duplicate-title notice is open
    Notice,
}

/// A removal waiting for the user's yes/no
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemove {
    pub id: TaskId,
    pub title: String,
}

/// A blocking message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Mode to return to once dismissed
    pub return_mode: Mode,
}

/// Clickable regions of one rendered row (absolute terminal columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHitbox {
    pub id: TaskId,
    pub y: u16,
    pub checkbox: (u16, u16),
    pub title: (u16, u16),
    pub edit_button: (u16, u16),
    pub remove_button: (u16, u16),
}

/// Main application state. Owns the store; rows only raise intents.
pub struct App {
    pub store: TaskStore,
    /// One controller per mounted row
    pub rows: HashMap<TaskId, ItemController>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub toggle_policy: EditingTogglePolicy,
    pub show_key_hints: bool,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub add_input: LineInput,
    pub pending_remove: Option<PendingRemove>,
    pub notice: Option<Notice>,
    pub status_message: Option<String>,
    /// Filled in by the renderer for mouse hit-testing
    pub row_hitboxes: Vec<RowHitbox>,
    pub add_bar_area: Rect,
    /// Column where title text starts inside a row (for click-to-place caret)
    pub title_col: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            rows: HashMap::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            toggle_policy: EditingTogglePolicy::from_flag(config.behavior.toggle_while_editing),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            add_input: LineInput::default(),
            pending_remove: None,
            notice: None,
            status_message: None,
            row_hitboxes: Vec::new(),
            add_bar_area: Rect::default(),
            title_col: 0,
        }
    }

    /// Add startup tasks; duplicates are skipped
    pub fn seed<S: AsRef<str>>(&mut self, titles: &[S]) {
        for title in titles {
            let title = title.as_ref();
            if let Err(e) = self.store.add_task(title) {
                warn!("skipping seeded task: {}", e);
            }
        }
        self.sync_rows();
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    /// The row currently in its edit session, if any
    pub fn editing_id(&self) -> Option<TaskId> {
        self.rows
            .values()
            .find(|row| row.is_editing())
            .map(|row| row.task_id())
    }

    pub fn row(&self, id: TaskId) -> Option<&ItemController> {
        self.rows.get(&id)
    }

    /// Mount controllers for new tasks, unmount removed ones, and push fresh
    /// task data into the rest. Called after every store change.
    pub fn sync_rows(&mut self) {
        let tasks = self.store.tasks();
        self.rows.retain(|id, _| tasks.iter().any(|t| t.id == *id));
        for task in tasks {
            self.rows
                .entry(task.id)
                .and_modify(|row| row.sync(task))
                .or_insert_with(|| ItemController::new(task));
        }
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    // -----------------------------------------------------------------------
    // Store access goes through here

    /// Apply a row's intent. Removal only opens the confirmation dialog.
    pub fn apply_intent(&mut self, intent: RowIntent) {
        match intent {
            RowIntent::ToggleDone(id) => {
                if self.store.toggle_task_done(id) {
                    let done = self.store.get(id).is_some_and(|t| t.done);
                    self.status_message = Some(if done {
                        "marked done".to_string()
                    } else {
                        "marked not done".to_string()
                    });
                }
            }
            RowIntent::Edit { id, title } => {
                if self.store.edit_task(id, &title) {
                    self.status_message = Some("title updated".to_string());
                }
            }
            RowIntent::Remove(id) => {
                let Some(task) = self.store.get(id) else {
                    return;
                };
                self.pending_remove = Some(PendingRemove {
                    id,
                    title: task.title.clone(),
                });
                self.mode = Mode::Confirm;
                debug!(%id, "asking to confirm removal");
                return;
            }
        }
        self.sync_rows();
    }

    /// Answer the removal dialog. Declining leaves the list alone.
    pub fn resolve_remove(&mut self, confirmed: bool) {
        let pending = self.pending_remove.take();
        self.mode = Mode::Navigate;
        let Some(pending) = pending else {
            return;
        };
        if !confirmed {
            debug!(id = %pending.id, "removal declined");
            return;
        }
        if self.store.remove_task(pending.id).is_some() {
            self.status_message = Some(format!("removed \"{}\"", pending.title));
        }
        self.sync_rows();
    }

    /// Submit the new-task bar
    pub fn submit_new_task(&mut self) {
        let title = self.add_input.text().to_string();
        if title.trim().is_empty() {
            return;
        }
        match self.store.add_task(&title) {
            Ok(id) => {
                self.add_input.clear();
                self.sync_rows();
                if let Some(pos) = self.store.position(id) {
                    self.cursor = pos;
                }
                self.status_message = Some(format!("added \"{}\"", title));
            }
            Err(AddError::DuplicateTitle(_)) => {
                info!(title = %title, "duplicate title rejected");
                self.notice = Some(Notice {
                    title: "Task already exists".to_string(),
                    message: "You cannot add a task with the same name".to_string(),
                    return_mode: Mode::Add,
                });
                self.mode = Mode::Notice;
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        let return_mode = self
            .notice
            .take()
            .map_or(Mode::Navigate, |n| n.return_mode);
        self.mode = return_mode;
    }

    // -----------------------------------------------------------------------
    // Row gestures

    /// Focus the new-task bar. Any edit session loses focus.
    pub fn focus_add_bar(&mut self) {
        self.blur_editing();
        self.mode = Mode::Add;
    }

    pub fn start_editing(&mut self, id: TaskId) {
        if self.editing_id().is_some_and(|current| current != id) {
            self.blur_editing();
        }
        let Some(task) = self.store.get(id).cloned() else {
            return;
        };
        if let Some(row) = self.rows.get_mut(&id) {
            row.start_editing(&task);
            self.mode = Mode::Edit;
            debug!(%id, "editing started");
        }
    }

    /// Confirm gesture on the editing row
    pub fn submit_editing(&mut self) {
        let intent = self
            .editing_id()
            .and_then(|id| self.rows.get_mut(&id))
            .and_then(|row| row.submit_editing());
        self.mode = Mode::Navigate;
        if let Some(intent) = intent {
            self.apply_intent(intent);
        }
    }

    /// Cancel gesture on the editing row
    pub fn cancel_editing(&mut self) {
        self.end_edit_session(|row, task| row.cancel_editing(task));
    }

    /// The editing row lost focus
    pub fn blur_editing(&mut self) {
        self.end_edit_session(|row, task| row.blur(task));
    }

    fn end_edit_session(&mut self, f: impl FnOnce(&mut ItemController, &Task)) {
        if let Some(id) = self.editing_id() {
            if let (Some(task), Some(row)) = (self.store.get(id), self.rows.get_mut(&id)) {
                f(row, task);
                debug!(%id, "edit session ended without commit");
            }
        }
        if self.mode == Mode::Edit {
            self.mode = Mode::Navigate;
        }
    }

    pub fn toggle_row(&mut self, id: TaskId) {
        let intent = self
            .rows
            .get(&id)
            .and_then(|row| row.toggle_done(self.toggle_policy));
        if let Some(intent) = intent {
            self.apply_intent(intent);
        }
    }

    pub fn request_remove_row(&mut self, id: TaskId) {
        let intent = self.rows.get(&id).and_then(|row| row.request_remove());
        if let Some(intent) = intent {
            self.apply_intent(intent);
        }
    }

    /// Draft of the editing row, for text input
    pub fn editing_draft_mut(&mut self) -> Option<&mut LineInput> {
        let id = self.editing_id()?;
        self.rows.get_mut(&id)?.draft_mut()
    }

    /// Move the cursor by `delta` rows
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }
}

/// Run the TUI application
pub fn run(config: &Config, seed: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    app.seed(seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));

    info!(tasks = app.store.len(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    info!("tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
