use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::text::edit_line;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.editing_id() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        // Commit
        (_, KeyCode::Enter) => app.submit_editing(),
        // Cancel
        (_, KeyCode::Esc) => app.cancel_editing(),
        // Focus moves away: blur, which also cancels
        (_, KeyCode::Tab | KeyCode::BackTab) => app.blur_editing(),
        (KeyModifiers::NONE, KeyCode::Up) => {
            app.blur_editing();
            app.move_cursor(-1);
        }
        (KeyModifiers::NONE, KeyCode::Down) => {
            app.blur_editing();
            app.move_cursor(1);
        }
        // The row's toggle stays reachable while editing (policy decides)
        (m, KeyCode::Char('t')) if m.contains(KeyModifiers::CONTROL) => app.toggle_row(id),
        // Remove is disabled while editing; the controller ignores it
        (m, KeyCode::Char('d')) if m.contains(KeyModifiers::CONTROL) => {
            app.request_remove_row(id)
        }
        _ => {
            if let Some(draft) = app.editing_draft_mut() {
                edit_line(draft, key);
            }
        }
    }
}
