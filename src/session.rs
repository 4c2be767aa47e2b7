//! Input/history controller.
//!
//! `Session` owns every piece of mutable widget state: the edit line, the
//! history, the output log, and whichever effect overlay is showing. It does
//! no I/O. Front ends feed it keys and effect messages and act on the
//! [`Directive`] it returns.

use crate::commands::{self, SideEffect};
use crate::effects::wipe::DISMISS_TEXT;
use crate::effects::{EffectEnvelope, EffectEvent, EffectId, EffectKind, MatrixFrame};
use crate::history::History;
use crate::output::OutputLog;
use crate::tui::InputLine;
use tracing::{debug, info};

/// Keyboard input already translated from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Submit,
    HistoryPrevious,
    HistoryNext,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    KillToStart,
    KillToEnd,
    KillWord,
    /// Ctrl-C: abandon the current line.
    Interrupt,
    /// Ctrl-D: leave when the line is empty.
    Eof,
    /// A key with no editing meaning. Still dismisses armed overlays.
    Other,
}

/// What the front end must do after a session update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Continue,
    Quit,
    StartEffect { id: EffectId, kind: EffectKind },
    CancelEffect(EffectId),
}

/// Visual treatment of the log while the wipe parody runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeStyle {
    Normal,
    Glitch,
    Corrupted,
}

/// Effect currently in control of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Matrix {
        id: EffectId,
        armed: bool,
        frame: Option<MatrixFrame>,
    },
    Wipe {
        id: EffectId,
        style: WipeStyle,
        armed: bool,
    },
}

impl Overlay {
    fn id(&self) -> Option<EffectId> {
        match self {
            Self::None => None,
            Self::Matrix { id, .. } | Self::Wipe { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    history: History,
    input: InputLine,
    log: OutputLog,
    input_enabled: bool,
    overlay: Overlay,
    next_effect_id: EffectId,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            input: InputLine::default(),
            log: OutputLog::default(),
            input_enabled: true,
            overlay: Overlay::None,
            next_effect_id: 1,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// False while the wipe parody owns the screen.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyInput) -> Directive {
        if self.overlay != Overlay::None {
            // Keys never reach the edit line while an effect is showing.
            return self.dismiss();
        }
        if !self.input_enabled {
            return Directive::Continue;
        }

        match key {
            KeyInput::Submit => {
                let line = self.input.take();
                return self.submit_line(&line);
            }
            KeyInput::HistoryPrevious => {
                if let Some(entry) = self.history.previous() {
                    self.input.set(entry);
                }
            }
            KeyInput::HistoryNext => {
                let entry = self.history.next();
                self.input.set(entry);
            }
            KeyInput::Char(ch) => self.input.insert(ch),
            KeyInput::Backspace => self.input.backspace(),
            KeyInput::Delete => self.input.delete(),
            KeyInput::Left => self.input.move_left(),
            KeyInput::Right => self.input.move_right(),
            KeyInput::Home => self.input.move_home(),
            KeyInput::End => self.input.move_end(),
            KeyInput::KillToStart => self.input.kill_to_start(),
            KeyInput::KillToEnd => self.input.kill_to_end(),
            KeyInput::KillWord => self.input.kill_word(),
            KeyInput::Interrupt => {
                self.input.clear();
                self.history.set_cursor(self.history.len());
            }
            KeyInput::Eof => {
                if self.input.is_empty() {
                    info!("eof on empty line");
                    return Directive::Quit;
                }
            }
            KeyInput::Other => {}
        }
        Directive::Continue
    }

    /// Submit a full line as if typed and followed by Enter.
    ///
    /// Blank lines leave history and log untouched.
    pub fn submit_line(&mut self, raw: &str) -> Directive {
        self.input.clear();
        if !self.input_enabled || self.overlay != Overlay::None {
            return Directive::Continue;
        }
        if !self.history.submit(raw) {
            return Directive::Continue;
        }

        let line = raw.trim();
        self.log.push_command(line);
        let dispatch = commands::dispatch(line);
        if let Some(text) = dispatch.output {
            self.log.push_response(text);
        }

        match dispatch.effect {
            None => Directive::Continue,
            Some(SideEffect::ClearLog) => {
                self.log.clear();
                Directive::Continue
            }
            Some(SideEffect::Terminate) => Directive::Quit,
            Some(SideEffect::StartEffect(kind)) => self.begin_effect(kind),
        }
    }

    /// Dismiss an armed overlay (any key press or a mouse click).
    pub fn dismiss(&mut self) -> Directive {
        match self.overlay {
            Overlay::Matrix { id, armed: true, .. } => {
                debug!(id, "matrix dismissed");
                self.overlay = Overlay::None;
                Directive::CancelEffect(id)
            }
            Overlay::Wipe { id, armed: true, .. } => {
                debug!(id, "wipe dismissed");
                self.overlay = Overlay::None;
                self.log.clear();
                self.log.push_response(DISMISS_TEXT);
                self.input_enabled = true;
                Directive::Continue
            }
            _ => Directive::Continue,
        }
    }

    /// Apply a message from an effect task.
    ///
    /// Returns `true` when visible state changed. Messages from effects that
    /// are no longer showing are dropped.
    pub fn apply_effect_event(&mut self, envelope: EffectEnvelope) -> bool {
        if self.overlay.id() != Some(envelope.id) {
            debug!(id = envelope.id, "dropping stale effect event");
            return false;
        }

        match (&mut self.overlay, envelope.event) {
            (Overlay::Matrix { frame, .. }, EffectEvent::Frame(next)) => {
                *frame = Some(next);
                true
            }
            (Overlay::Matrix { .. }, EffectEvent::Finished) => {
                self.overlay = Overlay::None;
                true
            }
            (Overlay::Matrix { armed, .. } | Overlay::Wipe { armed, .. }, EffectEvent::Armed) => {
                *armed = true;
                false
            }
            (Overlay::Wipe { .. }, EffectEvent::Line(text)) => {
                self.log.push_response(text);
                true
            }
            (Overlay::Wipe { style, .. }, EffectEvent::Glitch) => {
                *style = WipeStyle::Glitch;
                true
            }
            (Overlay::Wipe { style, .. }, EffectEvent::Corrupted) => {
                *style = WipeStyle::Corrupted;
                true
            }
            (_, event) => {
                debug!(?event, "effect event ignored for current overlay");
                false
            }
        }
    }

    fn begin_effect(&mut self, kind: EffectKind) -> Directive {
        let id = self.next_effect_id;
        self.next_effect_id += 1;
        self.overlay = match kind {
            EffectKind::Matrix => Overlay::Matrix {
                id,
                armed: false,
                frame: None,
            },
            EffectKind::Wipe => {
                self.input_enabled = false;
                Overlay::Wipe {
                    id,
                    style: WipeStyle::Normal,
                    armed: false,
                }
            }
        };
        Directive::StartEffect { id, kind }
    }
}
