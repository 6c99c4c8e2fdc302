use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }
        // Focus the new-task bar
        (KeyModifiers::NONE, KeyCode::Char('a' | 'i')) => app.focus_add_bar(),
        // Toggle done
        (KeyModifiers::NONE, KeyCode::Char(' ' | 'x')) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.toggle_row(id);
            }
        }
        // Start editing the title
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.start_editing(id);
            }
        }
        // Ask to remove
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.cursor_task().map(|t| t.id) {
                app.request_remove_row(id);
            }
        }
        (_, KeyCode::Char('?')) => {
            app.show_key_hints = !app.show_key_hints;
        }
        _ => {}
    }
}
