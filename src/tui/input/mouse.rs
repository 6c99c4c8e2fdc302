use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::{App, Mode, RowHitbox};

fn within(range: (u16, u16), x: u16) -> bool {
    x >= range.0 && x < range.1
}

/// Handle a mouse event. Hit-testing uses the regions recorded by the last
/// render.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Dialogs are modal
    if matches!(app.mode, Mode::Confirm | Mode::Notice) {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::Down(MouseButton::Left) => click(app, mouse.column, mouse.row),
        _ => {}
    }
}

fn click(app: &mut App, x: u16, y: u16) {
    if app.add_bar_area.contains(Position::new(x, y)) {
        app.focus_add_bar();
        return;
    }

    let Some(hit) = app.row_hitboxes.iter().find(|h| h.y == y).cloned() else {
        // Empty space: whatever had focus loses it
        app.blur_editing();
        if app.mode == Mode::Add {
            app.mode = Mode::Navigate;
        }
        return;
    };

    if let Some(pos) = app.store.position(hit.id) {
        app.cursor = pos;
    }
    if app.mode == Mode::Add {
        app.mode = Mode::Navigate;
    }
    click_row(app, &hit, x);
}

fn click_row(app: &mut App, hit: &RowHitbox, x: u16) {
    let editing_this = app.editing_id() == Some(hit.id);

    if within(hit.checkbox, x) {
        // The row's tap target: toggles even while editing, if allowed
        if !editing_this {
            app.blur_editing();
        }
        app.toggle_row(hit.id);
    } else if within(hit.edit_button, x) {
        if editing_this {
            app.cancel_editing();
        } else {
            app.start_editing(hit.id);
        }
    } else if within(hit.remove_button, x) {
        if !editing_this {
            app.blur_editing();
        }
        app.request_remove_row(hit.id);
    } else if within(hit.title, x) {
        if editing_this {
            let col = (x - hit.title.0) as usize;
            if let Some(draft) = app.editing_draft_mut() {
                draft.move_to_col(col);
            }
        } else {
            app.blur_editing();
        }
    } else if !editing_this {
        app.blur_editing();
    }
}
