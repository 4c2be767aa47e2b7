//! Timed visual effects started by commands.
//!
//! Each effect runs as its own tokio task and reports back through
//! [`EffectEnvelope`] messages on an [`EffectSink`]. Matrix frames share one
//! replaceable slot instead of queueing. Effects never touch session state directly;
//! the controller applies the messages it receives and drops those tagged
//! with a stale id.

pub mod matrix;
mod tasks;
pub mod wipe;

use std::time::Duration;

pub use matrix::{Cell, MatrixFrame, MatrixRain};
pub use tasks::{effect_channel, spawn_effect, EffectHandle, EffectSink, EffectSource};

/// Identifier assigned by the session each time an effect starts.
pub type EffectId = u64;

/// Delay before an effect accepts a dismissing key press or click.
pub const ARM_DELAY: Duration = Duration::from_millis(100);

/// Which visual sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Matrix-style screensaver, cancelled by the next key or click.
    Matrix,
    /// Fake `rm -rf /` sequence ending in a staged crash.
    Wipe,
}

impl EffectKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Wipe => "wipe",
        }
    }
}

/// Message emitted by a running effect task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectEvent {
    /// Full matrix grid snapshot for the next redraw.
    Frame(MatrixFrame),
    /// Response line to append to the log.
    Line(String),
    /// Switch the log to the glitch style.
    Glitch,
    /// Switch the log to the corrupted style.
    Corrupted,
    /// The next key press or click may dismiss the effect.
    Armed,
    /// The task has exited.
    Finished,
}

/// Effect message tagged with the id of the effect that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectEnvelope {
    pub id: EffectId,
    pub event: EffectEvent,
}

impl EffectEnvelope {
    pub fn new(id: EffectId, event: EffectEvent) -> Self {
        Self { id, event }
    }
}
