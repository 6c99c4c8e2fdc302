use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::line_input::LineInput;

/// Apply a line-editing key to `input`. Other keys are ignored.
pub(super) fn edit_line(input: &mut LineInput, key: KeyEvent) {
    let m = key.modifiers;
    let ctrl = m.contains(KeyModifiers::CONTROL);
    let alt = m.contains(KeyModifiers::ALT);

    match key.code {
        // Start / end of line: Home/End, Ctrl+A/E, Ctrl+Left/Right
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char('a') if ctrl => input.home(),
        KeyCode::Char('e') if ctrl => input.end(),
        KeyCode::Left if ctrl => input.home(),
        KeyCode::Right if ctrl => input.end(),
        // Word movement: Alt+arrow, readline Alt+B / Alt+F
        KeyCode::Left if alt => input.move_word_left(),
        KeyCode::Right if alt => input.move_word_right(),
        KeyCode::Char('b') if alt => input.move_word_left(),
        KeyCode::Char('f') if alt => input.move_word_right(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        // Kill to start of line
        KeyCode::Char('u') if ctrl => input.kill_to_start(),
        // Word backspace: Ctrl+W, Alt/Ctrl+Backspace
        KeyCode::Char('w') if ctrl => input.delete_word_left(),
        KeyCode::Backspace if ctrl || alt => input.delete_word_left(),
        KeyCode::Backspace => {
            input.backspace();
        }
        KeyCode::Delete => {
            input.delete();
        }
        KeyCode::Char(c) if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT => {
            input.insert_char(c);
        }
        _ => {}
    }
}
