//! Line-oriented front end for pipes and dumb terminals.
//!
//! Each input line is submitted as-is. Bytes that are not UTF-8 are replaced
//! rather than ending the session. Effects are not animated: the matrix
//! overlay is skipped and the wipe script is replayed instantly.

use crate::effects::{wipe, EffectEnvelope, EffectEvent, EffectId, EffectKind};
use crate::output::{LineKind, LogCursor};
use crate::session::{Directive, Session};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Feed every line of `input` to `session`, echoing the log to `out`.
///
/// Returns when input ends or a command asks to quit.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    prompt: &str,
) -> io::Result<()> {
    let mut cursor = LogCursor::default();
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = decode_line(&raw);
        let directive = session.submit_line(&line);
        write_unseen(session, &mut cursor, out, prompt)?;

        match directive {
            Directive::Quit => {
                info!("exit requested");
                return Ok(());
            }
            Directive::StartEffect { id, kind } => {
                replay_effect(session, id, kind);
                write_unseen(session, &mut cursor, out, prompt)?;
                session.dismiss();
                write_unseen(session, &mut cursor, out, prompt)?;
            }
            Directive::Continue | Directive::CancelEffect(_) => {}
        }
    }
    debug!("input exhausted");
    Ok(())
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> String {
    let trimmed = raw
        .strip_suffix(b"\n")
        .map(|r| r.strip_suffix(b"\r").unwrap_or(r))
        .unwrap_or(raw);
    let line = String::from_utf8_lossy(trimmed);
    if let std::borrow::Cow::Owned(_) = line {
        warn!(len = trimmed.len(), "input line was not valid UTF-8");
    }
    line.into_owned()
}

/// Drive an effect to its armed state without waiting.
fn replay_effect(session: &mut Session, id: EffectId, kind: EffectKind) {
    debug!(id, effect = kind.name(), "replaying effect without animation");
    if kind == EffectKind::Wipe {
        for step in wipe::script(Duration::ZERO) {
            session.apply_effect_event(EffectEnvelope::new(id, step.event));
        }
    } else {
        session.apply_effect_event(EffectEnvelope::new(id, EffectEvent::Armed));
    }
}

fn write_unseen<W: Write>(
    session: &Session,
    cursor: &mut LogCursor,
    out: &mut W,
    prompt: &str,
) -> io::Result<()> {
    for line in cursor.unseen(session.log()) {
        match line.kind {
            LineKind::Command => writeln!(out, "{prompt}{}", line.text)?,
            LineKind::Response => writeln!(out, "{}", line.text)?,
        }
    }
    out.flush()
}
