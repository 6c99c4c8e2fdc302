mod add;
mod confirm;
mod edit;
mod mouse;
mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use add::handle_add;
use confirm::{handle_confirm, handle_notice};
use edit::handle_edit;
use navigate::handle_navigate;

pub use mouse::handle_mouse;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if matches!(app.mode, Mode::Navigate | Mode::Add | Mode::Edit) {
        app.status_message = None;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Notice => handle_notice(app, key),
    }
}

/// Handle a bracketed paste. Goes to whichever text input has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Add => app.add_input.insert_str(text),
        Mode::Edit => {
            if let Some(draft) = app.editing_draft_mut() {
                draft.insert_str(text);
            }
        }
        _ => {}
    }
}
