//! Editable single-line input buffer.
//!
//! Positions are char indices so edits never split a UTF-8 sequence.

/// Live edit line with a char-index cursor in `0..=char_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    buffer: String,
    cursor: usize,
}

impl InputLine {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the whole line and park the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = char_count(&self.buffer);
    }

    /// Empty the line and return what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let byte_idx = byte_index_at_char(&self.buffer, self.cursor);
        self.buffer.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Delete one char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        delete_char_range(&mut self.buffer, self.cursor - 1, self.cursor);
        self.cursor -= 1;
    }

    /// Delete one char at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= char_count(&self.buffer) {
            return;
        }
        delete_char_range(&mut self.buffer, self.cursor, self.cursor + 1);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < char_count(&self.buffer) {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = char_count(&self.buffer);
    }

    /// Emacs-style kill-to-start-of-line.
    pub fn kill_to_start(&mut self) {
        delete_char_range(&mut self.buffer, 0, self.cursor);
        self.cursor = 0;
    }

    /// Emacs-style kill-to-end-of-line.
    pub fn kill_to_end(&mut self) {
        let end = char_count(&self.buffer);
        delete_char_range(&mut self.buffer, self.cursor, end);
    }

    /// Emacs-style backward-kill-word.
    pub fn kill_word(&mut self) {
        let start = previous_word_start(&self.buffer, self.cursor);
        delete_char_range(&mut self.buffer, start, self.cursor);
        self.cursor = start;
    }
}

/// Delete a char range represented in char indices.
fn delete_char_range(buffer: &mut String, start_char: usize, end_char: usize) {
    if start_char >= end_char {
        return;
    }
    let start = byte_index_at_char(buffer, start_char);
    let end = byte_index_at_char(buffer, end_char);
    buffer.replace_range(start..end, "");
}

/// Return the char index where the previous word starts.
fn previous_word_start(buffer: &str, cursor: usize) -> usize {
    let chars: Vec<char> = buffer.chars().collect();
    let mut idx = cursor.min(chars.len());
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
pub(crate) fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> InputLine {
        let mut input = InputLine::default();
        input.set(text);
        input
    }

    #[test]
    fn insert_at_cursor_mid_line() {
        let mut input = line("hep");
        input.move_left();
        input.insert('l');
        assert_eq!(input.as_str(), "help");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut input = line("ab");
        input.delete();
        assert_eq!(input.as_str(), "ab");
        input.backspace();
        assert_eq!(input.as_str(), "a");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        input.delete();
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn take_resets_line() {
        let mut input = line("date");
        assert_eq!(input.take(), "date");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn kill_commands() {
        let mut input = line("rm -rf /");
        input.kill_word();
        assert_eq!(input.as_str(), "rm -rf ");
        input.kill_word();
        assert_eq!(input.as_str(), "rm ");
        input.move_home();
        input.move_right();
        input.kill_to_end();
        assert_eq!(input.as_str(), "r");
        input.kill_to_start();
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn byte_index_respects_utf8_boundaries() {
        let s = "aéz";
        assert_eq!(byte_index_at_char(s, 0), 0);
        assert_eq!(byte_index_at_char(s, 1), 1);
        assert_eq!(byte_index_at_char(s, 2), 3);
        assert_eq!(byte_index_at_char(s, 3), s.len());
    }

    #[test]
    fn editing_multibyte_text() {
        let mut input = line("ｱｲ");
        input.backspace();
        input.insert('ｳ');
        assert_eq!(input.as_str(), "ｱｳ");
        input.move_left();
        input.delete();
        assert_eq!(input.as_str(), "ｱ");
    }
}
