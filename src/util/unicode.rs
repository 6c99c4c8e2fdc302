use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` cells, ending with `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `at`, or None at the end.
pub fn next_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    if at >= s.len() {
        return None;
    }
    let len = s[at..].graphemes(true).next().map_or(0, str::len);
    Some(at + len)
}

/// Byte offset of the grapheme boundary before `at`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    if at == 0 {
        return None;
    }
    s[..at].grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Terminal column of the byte offset `at`.
pub fn byte_offset_to_display_col(s: &str, at: usize) -> usize {
    display_width(&s[..at.min(s.len())])
}

/// Byte offset for a terminal column, snapped to the start of the grapheme
/// covering that column. Columns past the end map to `s.len()`.
pub fn display_col_to_byte_offset(s: &str, col: usize) -> usize {
    let mut used = 0;
    for (i, g) in s.grapheme_indices(true) {
        let w = display_width(g);
        if used + w > col {
            return i;
        }
        used += w;
    }
    s.len()
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `at` (whitespace-delimited).
pub fn word_boundary_left(s: &str, at: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..at.min(s.len())].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word right of `at` (whitespace-delimited), or the end.
pub fn word_boundary_right(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut rest = s[at..].grapheme_indices(true).peekable();
    while rest.next_if(|(_, g)| !is_blank(g)).is_some() {}
    while rest.next_if(|(_, g)| is_blank(g)).is_some() {}
    rest.peek().map_or(s.len(), |(i, _)| at + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛奶"), 4);
        assert_eq!(display_width("🥛 milk"), 7);
    }

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate_to_width("Buy milk", 8), "Buy milk");
        assert_eq!(truncate_to_width("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("Buy oat milk", 7), "Buy oa\u{2026}");
        assert_eq!(truncate_to_width("牛奶牛奶", 5), "牛奶\u{2026}");
        assert_eq!(truncate_to_width("Buy", 1), "\u{2026}");
        assert_eq!(truncate_to_width("Buy", 0), "");
    }

    #[test]
    fn grapheme_steps_over_combining_marks() {
        let s = "cafe\u{0301}s";
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn columns_and_offsets() {
        assert_eq!(byte_offset_to_display_col("牛奶", 3), 2);
        assert_eq!(display_col_to_byte_offset("牛奶", 2), 3);
        // Column inside a wide glyph snaps to its start
        assert_eq!(display_col_to_byte_offset("牛奶", 1), 0);
        assert_eq!(display_col_to_byte_offset("ab", 9), 2);
    }

    #[test]
    fn word_boundaries() {
        let s = "buy oat  milk";
        assert_eq!(word_boundary_left(s, s.len()), 9);
        assert_eq!(word_boundary_left(s, 9), 4);
        assert_eq!(word_boundary_left(s, 2), 0);
        assert_eq!(word_boundary_right(s, 0), 4);
        assert_eq!(word_boundary_right(s, 4), 9);
        assert_eq!(word_boundary_right(s, 9), s.len());
    }
}
