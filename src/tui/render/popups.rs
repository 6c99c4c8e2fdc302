use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Render the remove confirmation dialog
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let pending = match &app.pending_remove {
        Some(p) => p,
        None => return,
    };

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let inner_w = (popup_w as usize).saturating_sub(6);

    let lines = vec![
        Line::from(Span::styled(" Remove item", header_style(app))),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(
            "  Are you sure you want to remove this item?",
            text_style,
        )),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                unicode::truncate_to_width(&pending.title, inner_w),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" yes  ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" no", text_style),
        ]),
    ];

    render_box(frame, app, area, popup_w, lines);
}

/// Render the blocking notice (duplicate title)
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let notice = match &app.notice {
        Some(n) => n,
        None => return,
    };

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let popup_w: u16 = 50.min(area.width.saturating_sub(2));

    let lines = vec![
        Line::from(Span::styled(format!(" {}", notice.title), header_style(app))),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!("  {}", notice.message), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", dim_style),
            Span::styled(" ok", text_style),
        ]),
    ];

    render_box(frame, app, area, popup_w, lines);
}

fn header_style(app: &App) -> Style {
    Style::default()
        .fg(app.theme.highlight)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD)
}

fn render_box(frame: &mut Frame, app: &App, area: Rect, popup_w: u16, lines: Vec<Line>) {
    let bg = app.theme.background;
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_confirm_popup_names_the_task() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.tasks()[0].id;
        app.request_remove_row(id);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area)
        });
        assert!(out.contains("Remove item"));
        assert!(out.contains("Are you sure you want to remove this item?"));
        assert!(out.contains("Buy milk"));
        assert!(out.contains("y yes  n no"));
    }

    #[test]
    fn test_confirm_popup_absent_without_pending() {
        let app = app_with(&["Buy milk"]);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area)
        });
        assert_eq!(out, "");
    }

    #[test]
    fn test_notice_popup() {
        let mut app = app_with(&["Buy milk"]);
        app.focus_add_bar();
        app.add_input.set("Buy milk");
        app.submit_new_task();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notice_popup(frame, &app, area)
        });
        assert!(out.contains("Task already exists"));
        assert!(out.contains("You cannot add a task with the same name"));
        assert!(out.contains("Enter ok"));
    }

    #[test]
    fn test_centered_rect() {
        let r = centered_rect_fixed(20, 6, Rect::new(0, 0, 80, 24));
        assert_eq!(r, Rect::new(30, 9, 20, 6));
    }
}
