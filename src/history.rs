//! Submitted-line history with a movable read cursor.

use tracing::debug;

/// Append-only list of submitted lines plus a cursor in `0..=len`.
///
/// A cursor equal to `len` means "past the newest entry", i.e. the user is
/// editing a fresh line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line.
    ///
    /// The line is trimmed first. Blank lines are not recorded and return
    /// `false`. Every non-blank submission is kept, including repeats.
    pub fn submit(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.push(trimmed.to_string());
        self.cursor = self.entries.len();
        debug!(len = self.entries.len(), "history entry recorded");
        true
    }

    /// Step back one entry.
    ///
    /// Returns `None` at the oldest entry (or with empty history); the caller
    /// then keeps its buffer as is.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Step forward one entry.
    ///
    /// Moving past the newest entry parks the cursor at `len` and yields an
    /// empty string so the caller clears its buffer.
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            return self.entries[self.cursor].as_str();
        }
        self.cursor = self.entries.len();
        ""
    }

    /// Current cursor position in `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor directly, clamped to `0..=len`.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.entries.len());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> History {
        let mut history = History::new();
        for line in ["a", "b", "c"] {
            assert!(history.submit(line));
        }
        history
    }

    #[test]
    fn blank_lines_are_not_recorded() {
        let mut history = History::new();
        assert!(!history.submit(""));
        assert!(!history.submit("   \t "));
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn submit_trims_and_parks_cursor_past_end() {
        let mut history = History::new();
        history.submit("  date  ");
        assert_eq!(history.entries(), &["date".to_string()]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn repeated_lines_are_kept() {
        let mut history = History::new();
        history.submit("help");
        history.submit("help");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn previous_walks_back_and_stops_at_oldest() {
        let mut history = abc();
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.previous(), Some("c"));
        assert_eq!(history.previous(), Some("b"));
        assert_eq!(history.previous(), Some("a"));
        assert_eq!(history.previous(), None);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.previous(), None);
    }

    #[test]
    fn next_walks_forward_then_clears() {
        let mut history = abc();
        history.set_cursor(0);
        assert_eq!(history.next(), "b");
        assert_eq!(history.next(), "c");
        assert_eq!(history.next(), "");
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.next(), "");
        assert_eq!(history.cursor(), 3);
    }

    #[test]
    fn navigation_on_empty_history_is_inert() {
        let mut history = History::new();
        assert_eq!(history.previous(), None);
        assert_eq!(history.next(), "");
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn submit_after_navigation_resets_cursor() {
        let mut history = abc();
        history.previous();
        history.previous();
        history.submit("d");
        assert_eq!(history.cursor(), 4);
        assert_eq!(history.previous(), Some("d"));
    }

    #[test]
    fn set_cursor_clamps() {
        let mut history = abc();
        history.set_cursor(99);
        assert_eq!(history.cursor(), 3);
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Submit(String),
            Previous,
            Next,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                proptest::string::string_regex("[ a-z]{0,6}")
                    .expect("regex")
                    .prop_map(Op::Submit),
                Just(Op::Previous),
                Just(Op::Next),
            ]
        }

        proptest! {
            #[test]
            fn cursor_stays_in_bounds_and_entries_only_grow(
                ops in proptest::collection::vec(op(), 0..64)
            ) {
                let mut history = History::new();
                let mut expected: Vec<String> = Vec::new();
                for op in ops {
                    match op {
                        Op::Submit(line) => {
                            let recorded = history.submit(&line);
                            prop_assert_eq!(recorded, !line.trim().is_empty());
                            if recorded {
                                expected.push(line.trim().to_string());
                                prop_assert_eq!(history.cursor(), history.len());
                            }
                        }
                        Op::Previous => {
                            history.previous();
                        }
                        Op::Next => {
                            history.next();
                        }
                    }
                    prop_assert!(history.cursor() <= history.len());
                    prop_assert_eq!(history.entries(), expected.as_slice());
                }
            }
        }
    }
}
