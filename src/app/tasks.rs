//! Effect task bookkeeping for the interactive loop.

use pseudoterm::config::EffectsConfig;
use pseudoterm::effects::{spawn_effect, EffectHandle, EffectId, EffectSink};
use pseudoterm::session::Directive;
use std::collections::HashMap;
use tracing::debug;

/// Running effect tasks keyed by id.
pub(crate) struct EffectRegistry {
    timing: EffectsConfig,
    sink: EffectSink,
    handles: HashMap<EffectId, EffectHandle>,
}

impl EffectRegistry {
    pub(crate) fn new(timing: EffectsConfig, sink: EffectSink) -> Self {
        Self {
            timing,
            sink,
            handles: HashMap::new(),
        }
    }

    /// Act on a session directive. Returns `true` when the loop should quit.
    pub(crate) fn apply(&mut self, directive: Directive, size: (u16, u16)) -> bool {
        match directive {
            Directive::Continue => {}
            Directive::Quit => return true,
            Directive::StartEffect { id, kind } => {
                let handle = spawn_effect(id, kind, self.timing, size, self.sink.clone());
                self.handles.insert(id, handle);
            }
            Directive::CancelEffect(id) => {
                if let Some(handle) = self.handles.get(&id) {
                    handle.cancel();
                }
            }
        }
        false
    }

    /// Forget tasks that have exited.
    pub(crate) fn reap_finished(&mut self) {
        self.handles.retain(|id, handle| {
            let done = handle.is_finished();
            if done {
                debug!(id, effect = handle.kind.name(), "effect task reaped");
            }
            !done
        });
    }

    pub(crate) fn running(&self) -> usize {
        self.handles.len()
    }

    /// Abort everything still running.
    pub(crate) fn shutdown(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
