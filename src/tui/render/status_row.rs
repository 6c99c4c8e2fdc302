use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for each mode, as (key, action) pairs
fn key_hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Navigate => &[
            ("a", "add"),
            ("space", "toggle"),
            ("e", "edit"),
            ("d", "remove"),
            ("q", "quit"),
        ],
        Mode::Add => &[("Enter", "add"), ("Esc", "back")],
        Mode::Edit => &[("Enter", "save"), ("Esc", "cancel"), ("^T", "toggle")],
        Mode::Confirm => &[("y", "yes"), ("n", "no")],
        Mode::Notice => &[("Enter", "dismiss")],
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.show_key_hints {
        let mut hint_spans: Vec<Span> = Vec::new();
        for (i, (key, action)) in key_hints(app.mode).iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::styled("  ", Style::default().bg(bg)));
            }
            hint_spans.push(Span::styled(*key, Style::default().fg(app.theme.text).bg(bg)));
            hint_spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        hint_spans.push(Span::styled(" ", Style::default().bg(bg)));

        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width: usize = hint_spans.iter().map(|s| s.content.chars().count()).sum();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.extend(hint_spans);
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
