use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::text::edit_line;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        // Leave the bar; typed text stays for later
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.mode = Mode::Navigate,
        _ => edit_line(&mut app.add_input, key),
    }
}
