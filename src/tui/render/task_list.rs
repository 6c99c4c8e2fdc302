use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::ops::item_controller::ItemController;
use crate::tui::app::{App, Mode, RowHitbox};
use crate::util::unicode;

/// Width of the checkbox column, including its leading space
const CHECKBOX_COLS: u16 = 4;
const EDIT_LABEL: &str = " edit ";
const CANCEL_LABEL: &str = "cancel";
const REMOVE_LABEL: &str = "del";
/// " " + edit/cancel + " " + del + " "
const ACTIONS_COLS: u16 = 1 + 6 + 1 + 3 + 1;

/// Render the task rows and record their hitboxes for the mouse handler
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    app.row_hitboxes.clear();
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // A fresh edit session pulls its row under the cursor
    let focused = app
        .rows
        .values_mut()
        .find_map(|row| row.take_focus_request().then(|| row.task_id()));
    if let Some(pos) = focused.and_then(|id| app.store.position(id)) {
        app.cursor = pos;
    }

    let visible = area.height as usize;
    if visible == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }
    app.scroll_offset = app.scroll_offset.min(app.store.len().saturating_sub(visible));

    let title_x = area.x + CHECKBOX_COLS + 1;
    let title_w = area.width.saturating_sub(CHECKBOX_COLS + 1 + ACTIONS_COLS);
    app.title_col = title_x;

    let actions_x = area.x + area.width.saturating_sub(ACTIONS_COLS);
    let mut lines: Vec<Line> = Vec::with_capacity(visible);
    let mut hitboxes: Vec<RowHitbox> = Vec::with_capacity(visible);
    let mut caret: Option<Position> = None;

    for (offset, task) in app
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
    {
        let y = area.y + (offset - app.scroll_offset) as u16;
        let Some(row) = app.rows.get(&task.id) else {
            continue;
        };
        let is_cursor = offset == app.cursor;
        let (line, row_caret) = render_row(app, task, row, is_cursor, title_w as usize);
        if let Some(col) = row_caret {
            caret = Some(Position::new(title_x + col as u16, y));
        }
        lines.push(line);
        hitboxes.push(RowHitbox {
            id: task.id,
            y,
            checkbox: (area.x + 1, area.x + CHECKBOX_COLS),
            title: (title_x, title_x + title_w),
            edit_button: (actions_x + 1, actions_x + 7),
            remove_button: (actions_x + 8, actions_x + 11),
        });
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
    app.row_hitboxes = hitboxes;

    if app.mode == Mode::Edit
        && let Some(pos) = caret
    {
        frame.set_cursor_position(pos);
    }
}

/// Build one row. Returns the caret column within the title when editing.
fn render_row(
    app: &App,
    task: &Task,
    row: &ItemController,
    is_cursor: bool,
    title_w: usize,
) -> (Line<'static>, Option<usize>) {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);
    let editing = row.is_editing();

    let mut spans: Vec<Span<'static>> = Vec::new();
    spans.push(Span::styled(" ", base));

    let box_style = if task.done {
        base.fg(theme.done).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.dim)
    };
    spans.push(Span::styled(task.checkbox(), box_style));
    spans.push(Span::styled(" ", base));

    // Title, or the draft while editing
    let mut caret = None;
    let (title, title_style) = if editing {
        let draft = row.draft();
        let caret_col = draft.cursor_col();
        let skip = caret_col.saturating_sub(title_w.saturating_sub(1));
        let start = unicode::display_col_to_byte_offset(draft.text(), skip);
        caret = Some(caret_col - skip);
        (
            unicode::truncate_to_width(&draft.text()[start..], title_w),
            base.fg(theme.text_bright).add_modifier(Modifier::UNDERLINED),
        )
    } else {
        let mut style = base.fg(theme.title_color(task.done));
        if task.done {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if is_cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        (unicode::truncate_to_width(&task.title, title_w), style)
    };
    let pad = title_w.saturating_sub(unicode::display_width(&title));
    spans.push(Span::styled(title, title_style));
    spans.push(Span::styled(" ".repeat(pad), base));

    // Actions: edit/cancel, then remove (dimmed while editing)
    spans.push(Span::styled(" ", base));
    if editing {
        spans.push(Span::styled(CANCEL_LABEL, base.fg(theme.text)));
    } else {
        spans.push(Span::styled(EDIT_LABEL, base.fg(theme.text)));
    }
    spans.push(Span::styled(" ", base));
    let remove_style = if editing {
        base.fg(theme.dim).add_modifier(Modifier::DIM)
    } else {
        base.fg(theme.red)
    };
    spans.push(Span::styled(REMOVE_LABEL, remove_style));
    spans.push(Span::styled(" ", base));

    (Line::from(spans), caret)
}
