//! Append-only output log.

/// Which side of the conversation a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command.
    Command,
    /// Text produced by a command or an effect.
    Response,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

/// Visible log. Lines are only ever appended, or all removed at once.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
    /// Bumped on every clear so incremental readers can resynchronize.
    generation: u64,
}

impl OutputLog {
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(OutputLine {
            text: text.into(),
            kind,
        });
    }

    pub fn push_command(&mut self, text: impl Into<String>) {
        self.push(LineKind::Command, text);
    }

    pub fn push_response(&mut self, text: impl Into<String>) {
        self.push(LineKind::Response, text);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.generation += 1;
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks how much of a log has already been consumed by a streaming writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogCursor {
    generation: u64,
    seen: usize,
}

impl LogCursor {
    /// Return lines appended since the last call.
    ///
    /// After a clear, everything currently in the log counts as new.
    pub fn unseen<'a>(&mut self, log: &'a OutputLog) -> &'a [OutputLine] {
        if log.generation() != self.generation {
            self.generation = log.generation();
            self.seen = 0;
        }
        let start = self.seen.min(log.len());
        self.seen = log.len();
        &log.lines()[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_and_bumps_generation() {
        let mut log = OutputLog::default();
        log.push_command("help");
        log.push_response("text");
        assert_eq!(log.len(), 2);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.generation(), 1);
    }

    #[test]
    fn cursor_yields_only_new_lines() {
        let mut log = OutputLog::default();
        let mut cursor = LogCursor::default();
        log.push_command("a");
        assert_eq!(cursor.unseen(&log).len(), 1);
        assert!(cursor.unseen(&log).is_empty());
        log.push_response("b");
        log.push_response("c");
        let fresh = cursor.unseen(&log);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].text, "b");
    }

    #[test]
    fn cursor_resyncs_after_clear() {
        let mut log = OutputLog::default();
        let mut cursor = LogCursor::default();
        log.push_command("a");
        log.push_command("b");
        cursor.unseen(&log);
        log.clear();
        log.push_response("fresh");
        let fresh = cursor.unseen(&log);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].text, "fresh");
    }
}
