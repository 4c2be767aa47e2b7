//! Terminal input: raw-mode guard, key mapping, and the key reader thread.
//!
//! crossterm's event reader blocks, so it runs on its own thread and forwards
//! translated events to the async loop through a channel.

use crate::session::KeyInput;
use crate::tui::settings;
use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Terminal events the front end cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(KeyInput),
    Click,
    Resize(u16, u16),
}

/// Translate one crossterm key event.
///
/// Returns `None` for releases and for keys with no meaning at all.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let mapped = match key.code {
        KeyCode::Enter => KeyInput::Submit,
        KeyCode::Up => KeyInput::HistoryPrevious,
        KeyCode::Down => KeyInput::HistoryNext,
        KeyCode::Left => KeyInput::Left,
        KeyCode::Right => KeyInput::Right,
        KeyCode::Home => KeyInput::Home,
        KeyCode::End => KeyInput::End,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Delete => KeyInput::Delete,
        KeyCode::Char('c') if ctrl => KeyInput::Interrupt,
        KeyCode::Char('d') if ctrl => KeyInput::Eof,
        KeyCode::Char('a') if ctrl => KeyInput::Home,
        KeyCode::Char('e') if ctrl => KeyInput::End,
        KeyCode::Char('b') if ctrl => KeyInput::Left,
        KeyCode::Char('f') if ctrl => KeyInput::Right,
        KeyCode::Char('p') if ctrl => KeyInput::HistoryPrevious,
        KeyCode::Char('n') if ctrl => KeyInput::HistoryNext,
        KeyCode::Char('u') if ctrl => KeyInput::KillToStart,
        KeyCode::Char('k') if ctrl => KeyInput::KillToEnd,
        KeyCode::Char('w') if ctrl => KeyInput::KillWord,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => KeyInput::Other,
        KeyCode::Char(ch) => KeyInput::Char(ch),
        _ => KeyInput::Other,
    };
    Some(mapped)
}

fn map_event(evt: Event) -> Option<TermEvent> {
    match evt {
        Event::Key(key) => map_key(key).map(TermEvent::Key),
        Event::Mouse(mouse) => {
            matches!(mouse.kind, MouseEventKind::Down(_)).then_some(TermEvent::Click)
        }
        Event::Resize(cols, rows) => Some(TermEvent::Resize(cols, rows)),
        _ => None,
    }
}

/// Raw mode plus alternate screen and mouse capture, restored on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = out
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(EnableMouseCapture))
        {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(LeaveAlternateScreen);
        let _ = out.execute(Show);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// RAII handle for the key reader thread.
pub struct KeyReader {
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl KeyReader {
    /// Stop polling and join the reader thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for KeyReader {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Start forwarding terminal events to `tx`.
///
/// The thread exits when the stop flag is set, the receiver is dropped, or
/// reading from the terminal fails.
pub fn spawn_key_reader(tx: mpsc::UnboundedSender<TermEvent>) -> KeyReader {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let poll_interval = Duration::from_millis(settings::REPL_EVENT_POLL_MS);
        while !stop_flag.load(Ordering::Relaxed) {
            match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    warn!(error = %err, "terminal poll failed");
                    break;
                }
            }
            let evt = match event::read() {
                Ok(evt) => evt,
                Err(err) => {
                    warn!(error = %err, "terminal read failed");
                    break;
                }
            };
            let Some(mapped) = map_event(evt) else {
                continue;
            };
            if tx.send(mapped).is_err() {
                break;
            }
        }
        debug!("key reader stopped");
    });

    KeyReader {
        stop,
        thread: Some(thread),
    }
}
