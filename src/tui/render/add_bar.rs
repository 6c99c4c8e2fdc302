use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PROMPT: &str = " + ";

/// Render the new-task input bar
pub fn render_add_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    app.add_bar_area = area;
    let bg = app.theme.background;
    let focused = app.mode == Mode::Add;

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.input_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let prompt_style = Style::default().fg(app.theme.dim).bg(bg);
    let text_width = (inner.width as usize).saturating_sub(PROMPT.len());

    let line = if app.add_input.is_empty() && !focused {
        Line::from(vec![
            Span::styled(PROMPT, prompt_style),
            Span::styled("new task", prompt_style),
        ])
    } else {
        // Keep the caret in view on long input
        let text = app.add_input.text();
        let caret_col = app.add_input.cursor_col();
        let skip = caret_col.saturating_sub(text_width.saturating_sub(1));
        let start = unicode::display_col_to_byte_offset(text, skip);
        let visible = unicode::truncate_to_width(&text[start..], text_width);
        if focused && inner.height > 0 {
            let x = inner.x + (PROMPT.len() + caret_col - skip) as u16;
            frame.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
        }
        Line::from(vec![
            Span::styled(PROMPT, prompt_style),
            Span::styled(visible, Style::default().fg(app.theme.text_bright).bg(bg)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
