//! Full-screen interactive mode.
//!
//! One `select!` loop owns the session. Keys arrive from the reader thread,
//! effect messages from the effect tasks; both only ever reach the session
//! through this loop.

use crate::app::tasks::EffectRegistry;
use crossterm::terminal;
use pseudoterm::config::Config;
use pseudoterm::effects::effect_channel;
use pseudoterm::error::AppError;
use pseudoterm::session::{Directive, Session};
use pseudoterm::tui::{settings, spawn_key_reader, Renderer, TermEvent, TerminalGuard};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub(crate) async fn run_interactive(config: &Config) -> Result<(), AppError> {
    let _guard = TerminalGuard::acquire()?;
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let mut reader = spawn_key_reader(key_tx);
    let (effect_sink, mut effect_source) = effect_channel();
    let mut effects = EffectRegistry::new(config.effects, effect_sink);

    let prompt = config.display.prompt.as_str();
    let mut session = Session::new();
    let mut renderer = Renderer::new(config.display.color);
    let mut size =
        terminal::size().unwrap_or((settings::FALLBACK_COLUMNS, settings::FALLBACK_ROWS));
    let mut stdout = io::stdout();
    renderer.draw(&mut stdout, &session, prompt, size)?;

    loop {
        let dirty = tokio::select! {
            evt = key_rx.recv() => {
                let Some(evt) = evt else {
                    debug!("key reader closed");
                    break;
                };
                let directive = match evt {
                    TermEvent::Key(key) => session.handle_key(key),
                    TermEvent::Click => session.dismiss(),
                    TermEvent::Resize(cols, rows) => {
                        size = (cols, rows);
                        Directive::Continue
                    }
                };
                if effects.apply(directive, size) {
                    info!("exit requested");
                    break;
                }
                true
            }
            Some(envelope) = effect_source.recv() => {
                let changed = session.apply_effect_event(envelope);
                effects.reap_finished();
                changed
            }
        };
        if dirty {
            renderer.draw(&mut stdout, &session, prompt, size)?;
        }
    }

    debug!(running = effects.running(), "stopping effects");
    effects.shutdown();
    reader.finish();
    Ok(())
}
