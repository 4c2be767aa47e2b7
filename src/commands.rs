//! Command table metadata and dispatch.
//!
//! Dispatch is pure: handlers only produce text, and anything that touches
//! the outside world (clearing the log, leaving, starting an animation) is
//! returned as a [`SideEffect`] for the caller to apply.

use crate::effects::EffectKind;
use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

/// Text printed by `help`.
pub const HELP_TEXT: &str = "Available commands:
  help     - Show this help message
  clear    - Clear the terminal
  date     - Show current date
  exit     - Exit the terminal

Yes, that's all. I'm working on it.";

pub const SUDO_TEXT: &str = "Nice try, but you have no power here.";
pub const MATRIX_TEXT: &str = "Wake up, Neo...";

/// Prefix of the response for unmatched input.
pub const NOT_FOUND_PREFIX: &str = "command not found: ";

/// Built-in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Date,
    Exit,
    Sudo,
    Matrix,
    Wipe,
}

/// One static command table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub trigger: &'static str,
    pub command: Command,
}

/// The full command vocabulary. Triggers are already lowercase.
pub const COMMANDS: [CommandEntry; 7] = [
    CommandEntry {
        trigger: "help",
        command: Command::Help,
    },
    CommandEntry {
        trigger: "clear",
        command: Command::Clear,
    },
    CommandEntry {
        trigger: "date",
        command: Command::Date,
    },
    CommandEntry {
        trigger: "exit",
        command: Command::Exit,
    },
    CommandEntry {
        trigger: "sudo",
        command: Command::Sudo,
    },
    CommandEntry {
        trigger: "matrix",
        command: Command::Matrix,
    },
    CommandEntry {
        trigger: "rm -rf /",
        command: Command::Wipe,
    },
];

/// Effect the caller must apply after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Empty the visible output log.
    ClearLog,
    /// End the session.
    Terminate,
    /// Launch a timed visual sequence.
    StartEffect(EffectKind),
}

/// Result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Response line to display; `None` suppresses the response line.
    pub output: Option<String>,
    pub effect: Option<SideEffect>,
}

impl Dispatch {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            effect: None,
        }
    }

    fn silent(effect: SideEffect) -> Self {
        Self {
            output: None,
            effect: Some(effect),
        }
    }
}

/// Look up the command for `raw` after trimming and lowercasing.
pub fn lookup(raw: &str) -> Option<Command> {
    let normalized = raw.trim().to_lowercase();
    COMMANDS
        .iter()
        .find(|entry| entry.trigger == normalized)
        .map(|entry| entry.command)
}

/// Dispatch `raw` using the local wall clock for `date`.
pub fn dispatch(raw: &str) -> Dispatch {
    dispatch_at(raw, &Local::now())
}

/// Dispatch `raw` with an explicit clock reading.
///
/// Unmatched input echoes `raw` exactly as given, not the normalized form.
pub fn dispatch_at<Tz>(raw: &str, now: &DateTime<Tz>) -> Dispatch
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(command) = lookup(raw) else {
        debug!(input = raw, "unknown command");
        return Dispatch::text(format!("{NOT_FOUND_PREFIX}{raw}"));
    };
    debug!(?command, "dispatching");

    match command {
        Command::Help => Dispatch::text(HELP_TEXT),
        Command::Clear => Dispatch::silent(SideEffect::ClearLog),
        Command::Date => Dispatch::text(format_date(now)),
        Command::Exit => Dispatch::silent(SideEffect::Terminate),
        Command::Sudo => Dispatch::text(SUDO_TEXT),
        Command::Matrix => Dispatch {
            output: Some(MATRIX_TEXT.to_string()),
            effect: Some(SideEffect::StartEffect(EffectKind::Matrix)),
        },
        Command::Wipe => Dispatch::silent(SideEffect::StartEffect(EffectKind::Wipe)),
    }
}

/// Format like a browser `Date.toString()`: `Fri Oct 16 2026 14:03:07 GMT+0200`.
///
/// Browsers append a localized zone name such as ` (Central European Summer
/// Time)`. chrono only knows the numeric offset of `Local`, so the output
/// stops at `GMT%z`.
pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
