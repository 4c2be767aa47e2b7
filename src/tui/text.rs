//! Shared text formatting helpers used by terminal rendering.
//!
//! Widths are in terminal cells: East Asian wide characters take two, combining
//! marks and control characters take none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Count the terminal cells `s` occupies.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Clip a string to at most `max_width` cells.
///
/// A wide character that would straddle the edge is dropped.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    if visible_width(s) <= max_width {
        return s.to_string();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Wrap multi-line text to `max_width`, keeping blank lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    text.split('\n')
        .flat_map(|line| wrap_for_block(line, max_width))
        .collect()
}

/// Wrap a single line to fit `max_width`.
///
/// This prefers whitespace boundaries when possible and falls back to hard
/// wrapping long words/tokens.
pub fn wrap_for_block(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = fit_end(&chars, start, max_width);
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = skip_whitespace(&chars, end);
            continue;
        }

        let split = (start + 1..end).rev().find(|idx| chars[*idx].is_whitespace());
        if let Some(split_idx) = split {
            out.push(chars[start..split_idx].iter().collect());
            start = skip_whitespace(&chars, split_idx);
            continue;
        }

        out.push(chars[start..end].iter().collect());
        start = end;
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Split a line into rows of at most `max_width` cells without looking for
/// word boundaries.
///
/// Used for the edit line; [`cell_position`] maps a char index onto the same
/// rows. A wide character that does not fit moves to the next row whole.
pub fn hard_wrap(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let mut rows = vec![String::new()];
    let mut col = 0usize;
    for ch in line.chars() {
        let w = char_width(ch);
        if col > 0 && col + w > max_width {
            rows.push(String::new());
            col = 0;
        }
        col += w;
        if let Some(row) = rows.last_mut() {
            row.push(ch);
        }
    }
    rows
}

/// `(column, row)` of the cell where char `char_idx` of `line` starts once
/// laid out by [`hard_wrap`]. An index past the end gives the cell after the
/// last character, which may be the first cell of a new row.
pub fn cell_position(line: &str, char_idx: usize, max_width: usize) -> (usize, usize) {
    let max_width = max_width.max(1);
    let (mut col, mut row) = (0usize, 0usize);
    let mut chars = line.chars();
    for _ in 0..char_idx {
        let Some(ch) = chars.next() else {
            break;
        };
        let w = char_width(ch);
        if col > 0 && col + w > max_width {
            row += 1;
            col = 0;
        }
        col += w;
    }
    let next = chars.next().map(char_width).unwrap_or(1);
    if col > 0 && (col >= max_width || col + next > max_width) {
        return (0, row + 1);
    }
    (col, row)
}

/// Index one past the last char from `start` that fits in `max_width` cells.
/// Always advances by at least one char.
fn fit_end(chars: &[char], start: usize, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = start;
    while end < chars.len() {
        let w = char_width(chars[end]);
        if end > start && used + w > max_width {
            break;
        }
        used += w;
        end += 1;
    }
    end
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_to_width_limits_by_chars() {
        assert_eq!(clip_to_width("ｱｲｳｴ", 3), "ｱｲｳ");
    }

    #[test]
    fn wrap_for_block_prefers_word_boundaries() {
        let wrapped = wrap_for_block("one two three", 7);
        assert_eq!(wrapped, vec!["one two".to_string(), "three".to_string()]);
    }

    #[test]
    fn wrap_for_block_falls_back_to_hard_wrap() {
        let wrapped = wrap_for_block("superlongtoken", 5);
        assert_eq!(
            wrapped,
            vec!["super".to_string(), "longt".to_string(), "oken".to_string()]
        );
    }

    #[test]
    fn wrap_text_keeps_blank_lines() {
        // Help text uses an empty line between the header and the table.
        let wrapped = wrap_text("Available commands:\n\nhelp", 40);
        assert_eq!(wrapped, vec!["Available commands:", "", "help"]);
    }

    #[test]
    fn hard_wrap_splits_exactly_at_width() {
        assert_eq!(hard_wrap("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(hard_wrap("", 3), vec![""]);
        assert!(hard_wrap("abc", 0).is_empty());
    }

    #[test]
    fn visible_width_counts_cells() {
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width("ｱｲ"), 2);
        assert_eq!(visible_width("アイ"), 4);
        assert_eq!(visible_width("e\u{301}"), 1);
    }

    #[test]
    fn wide_chars_wrap_and_clip_by_cells() {
        assert_eq!(clip_to_width("アイウ", 5), "アイ");
        assert_eq!(hard_wrap("$ アイウ", 6), vec!["$ アイ", "ウ"]);
        assert_eq!(hard_wrap("aアイ", 2), vec!["a", "ア", "イ"]);
        assert_eq!(wrap_for_block("アイ ウエ", 5), vec!["アイ", "ウエ"]);
    }

    #[test]
    fn cell_position_follows_hard_wrap() {
        let line = "$ アイウ";
        assert_eq!(cell_position(line, 2, 6), (2, 0));
        assert_eq!(cell_position(line, 3, 6), (4, 0));
        // ウ does not fit after イ, so it starts the next row.
        assert_eq!(cell_position(line, 4, 6), (0, 1));
        assert_eq!(cell_position(line, 5, 6), (2, 1));
        // A full row parks the cursor at the start of the next one.
        assert_eq!(cell_position("abcde", 5, 5), (0, 1));
        assert_eq!(cell_position("", 0, 5), (0, 0));
    }
}
