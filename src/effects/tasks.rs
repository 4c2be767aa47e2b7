//! Effect task lifecycle helpers.
//!
//! Spawning and cancellation live here so the front-end loop only deals with
//! ids and messages.

use super::matrix::MatrixRain;
use super::wipe;
use super::{EffectEnvelope, EffectEvent, EffectId, EffectKind, ARM_DELAY};
use crate::config::EffectsConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Sending half shared by all effect tasks.
///
/// Discrete events queue in order. Matrix frames go through a single slot
/// where a newer frame replaces one not yet read, so a slow terminal never
/// builds a backlog.
#[derive(Clone)]
pub struct EffectSink {
    events: mpsc::UnboundedSender<EffectEnvelope>,
    frames: Arc<watch::Sender<Option<EffectEnvelope>>>,
}

impl EffectSink {
    fn send(&self, id: EffectId, event: EffectEvent) -> bool {
        self.events.send(EffectEnvelope::new(id, event)).is_ok()
    }

    /// Overwrite the pending frame. Fails once the receiving side is gone.
    fn send_frame(&self, id: EffectId, event: EffectEvent) -> bool {
        if self.events.is_closed() {
            return false;
        }
        self.frames.send_replace(Some(EffectEnvelope::new(id, event)));
        true
    }
}

/// Receiving half owned by the front-end loop.
pub struct EffectSource {
    events: mpsc::UnboundedReceiver<EffectEnvelope>,
    frames: watch::Receiver<Option<EffectEnvelope>>,
}

impl EffectSource {
    /// Next event or newest unseen frame. Queued events are delivered first.
    ///
    /// Cancel-safe, so it can sit in a `select!` branch.
    pub async fn recv(&mut self) -> Option<EffectEnvelope> {
        loop {
            tokio::select! {
                biased;
                event = self.events.recv() => return event,
                changed = self.frames.changed() => {
                    if changed.is_err() {
                        return self.events.recv().await;
                    }
                    if let Some(frame) = self.frames.borrow_and_update().clone() {
                        return Some(frame);
                    }
                }
            }
        }
    }
}

/// Create a connected sink/source pair.
pub fn effect_channel() -> (EffectSink, EffectSource) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (frames_tx, frames_rx) = watch::channel(None);
    (
        EffectSink {
            events: events_tx,
            frames: Arc::new(frames_tx),
        },
        EffectSource {
            events: events_rx,
            frames: frames_rx,
        },
    )
}

/// Front-end-owned handle for one running effect.
pub struct EffectHandle {
    pub id: EffectId,
    pub kind: EffectKind,
    /// One-shot cancellation signal observed by cancellable effects.
    cancel_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl EffectHandle {
    /// Ask the effect to stop. The wipe script ignores this; it is bounded.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Hard-stop the task, used on shutdown.
    pub fn abort(&self) {
        self.join.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Spawn an effect task that reports through `sink`.
///
/// `size` is the terminal size (columns, rows) at launch; the matrix grid is
/// fixed to it for the effect's lifetime.
pub fn spawn_effect(
    id: EffectId,
    kind: EffectKind,
    timing: EffectsConfig,
    size: (u16, u16),
    sink: EffectSink,
) -> EffectHandle {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    info!(id, effect = kind.name(), "starting effect");
    let join = match kind {
        EffectKind::Matrix => tokio::spawn(run_matrix(id, timing, size, cancel_rx, sink)),
        EffectKind::Wipe => tokio::spawn(run_wipe(id, timing, sink)),
    };
    EffectHandle {
        id,
        kind,
        cancel_tx,
        join,
    }
}

async fn run_matrix(
    id: EffectId,
    timing: EffectsConfig,
    (cols, rows): (u16, u16),
    mut cancel_rx: watch::Receiver<bool>,
    sink: EffectSink,
) {
    let mut rng = StdRng::from_entropy();
    let mut rain = MatrixRain::new(cols, rows, &mut rng);
    let started = Instant::now();
    let mut ticker = time::interval(timing.matrix_tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let arm = time::sleep(ARM_DELAY);
    tokio::pin!(arm);
    let mut armed = false;

    loop {
        tokio::select! {
            changed = cancel_rx.changed() => {
                // A dropped sender also means nobody is watching anymore.
                if changed.is_err() || *cancel_rx.borrow() {
                    break;
                }
            }
            () = &mut arm, if !armed => {
                armed = true;
                if !sink.send(id, EffectEvent::Armed) {
                    break;
                }
            }
            _ = ticker.tick() => {
                rain.step(started.elapsed(), timing.matrix_ramp(), &mut rng);
                if !sink.send_frame(id, EffectEvent::Frame(rain.frame())) {
                    break;
                }
            }
        }
    }

    debug!(id, "matrix stopped");
    sink.send(id, EffectEvent::Finished);
}

async fn run_wipe(id: EffectId, timing: EffectsConfig, sink: EffectSink) {
    for step in wipe::script(timing.wipe_step()) {
        if !step.delay.is_zero() {
            time::sleep(step.delay).await;
        }
        if !sink.send(id, step.event) {
            return;
        }
    }
    debug!(id, "wipe script complete");
    sink.send(id, EffectEvent::Finished);
}
