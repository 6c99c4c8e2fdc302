use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub done: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub input_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1C, 0x1C, 0x1C),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x88, 0x84, 0xFF),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            selection_bg: Color::Rgb(0x2E, 0x2B, 0x4A),
            input_border: Color::Rgb(0x44, 0x44, 0x44),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() || hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "red" => theme.red = color,
                "selection_bg" => theme.selection_bg = color,
                "input_border" => theme.input_border = color,
                _ => {}
            }
        }
        theme
    }

    /// Title color for a task row
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
