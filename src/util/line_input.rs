use crate::util::unicode;

/// A single-line text buffer with a cursor, used by every text-entry surface.
///
/// The cursor is a byte offset that always sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    /// Create an input holding `text`, cursor at the end
    pub fn with_text(text: &str) -> Self {
        let mut input = LineInput::default();
        input.set(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in terminal cells from the start of the text
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.text, self.cursor)
    }

    /// Replace the content; cursor moves to the end
    pub fn set(&mut self, text: &str) {
        self.text = flatten(text);
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the content out, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean = flatten(s);
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) -> bool {
        match unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            Some(prev) => {
                self.text.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match unicode::next_grapheme_boundary(&self.text, self.cursor) {
            Some(next) => {
                self.text.drain(self.cursor..next);
                true
            }
            None => false,
        }
    }

    pub fn delete_word_left(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Ctrl+U: drop everything before the cursor
    pub fn kill_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_word_left(&mut self) {
        self.cursor = unicode::word_boundary_left(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = unicode::word_boundary_right(&self.text, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Place the cursor at a terminal column (mouse click)
    pub fn move_to_col(&mut self, col: usize) {
        self.cursor = unicode::display_col_to_byte_offset(&self.text, col);
    }
}

fn flatten(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ")
}
