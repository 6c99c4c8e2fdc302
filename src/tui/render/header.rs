use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::task_count_label;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the app title with the task count, and a separator below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = " ticklist";
    let mut counts = task_count_label(app.store.len());
    let done = app.store.done_count();
    if done > 0 {
        counts.push_str(&format!(" \u{00B7} {} done", done));
    }
    counts.push(' ');

    let used = unicode::display_width(title) + unicode::display_width(&counts);
    let padding = width.saturating_sub(used);

    let top = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(counts, Style::default().fg(app.theme.text).bg(bg)),
    ]);
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(
        Paragraph::new(vec![top, separator]).style(Style::default().bg(bg)),
        area,
    );
}
