//! End-to-end flows through the public `Session` API.
//!
//! Effects run as real tasks on a paused tokio clock so the full wipe script
//! completes instantly and deterministically.

use pseudoterm::commands::{HELP_TEXT, NOT_FOUND_PREFIX};
use pseudoterm::config::EffectsConfig;
use pseudoterm::effects::wipe::{CRITICAL_FAILURE, DISMISS_TEXT, FAKE_PATHS, KERNEL_PANIC};
use pseudoterm::effects::{effect_channel, spawn_effect, EffectEvent};
use pseudoterm::line_mode::run_lines;
use pseudoterm::output::LineKind;
use pseudoterm::session::{Directive, KeyInput, Overlay, Session, WipeStyle};

fn type_and_submit(session: &mut Session, text: &str) -> Directive {
    for ch in text.chars() {
        session.handle_key(KeyInput::Char(ch));
    }
    session.handle_key(KeyInput::Submit)
}

fn log_texts(session: &Session) -> Vec<String> {
    session.log().lines().iter().map(|l| l.text.clone()).collect()
}

#[test]
fn help_is_case_insensitive_and_history_keeps_original_text() {
    let mut session = Session::new();
    for variant in ["help", "HELP", "Help"] {
        type_and_submit(&mut session, variant);
    }
    let responses: Vec<&str> = session
        .log()
        .lines()
        .iter()
        .filter(|l| l.kind == LineKind::Response)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(responses, vec![HELP_TEXT; 3]);
    assert_eq!(session.history().entries(), &["help", "HELP", "Help"]);
    assert_eq!(session.history().cursor(), 3);
}

#[test]
fn unknown_then_clear_then_navigate() {
    let mut session = Session::new();
    type_and_submit(&mut session, "ls -la");
    assert_eq!(
        log_texts(&session),
        vec!["ls -la".to_string(), format!("{NOT_FOUND_PREFIX}ls -la")]
    );

    type_and_submit(&mut session, "clear");
    assert!(session.log().is_empty());

    session.handle_key(KeyInput::HistoryPrevious);
    session.handle_key(KeyInput::HistoryPrevious);
    assert_eq!(session.input().as_str(), "ls -la");
    session.handle_key(KeyInput::Submit);
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.log().len(), 2);
}

#[test]
fn date_prints_one_response_line() {
    let mut session = Session::new();
    type_and_submit(&mut session, "date");
    let lines = session.log().lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].text.contains("GMT"), "got {:?}", lines[1].text);
}

#[tokio::test(start_paused = true)]
async fn wipe_task_drives_session_to_dismissal() {
    let mut session = Session::new();
    let Directive::StartEffect { id, kind } = type_and_submit(&mut session, "rm -rf /") else {
        panic!("rm -rf / should start an effect");
    };

    let (tx, mut rx) = effect_channel();
    let _handle = spawn_effect(id, kind, EffectsConfig::default(), (80, 24), tx);

    while let Some(envelope) = rx.recv().await {
        let finished = envelope.event == EffectEvent::Finished;
        session.apply_effect_event(envelope);
        if finished {
            break;
        }
    }

    assert!(matches!(
        session.overlay(),
        Overlay::Wipe {
            style: WipeStyle::Corrupted,
            armed: true,
            ..
        }
    ));
    let texts = log_texts(&session);
    assert_eq!(texts.len(), 1 + FAKE_PATHS.len() + 2);
    assert_eq!(texts[texts.len() - 2], CRITICAL_FAILURE);
    assert_eq!(texts[texts.len() - 1], KERNEL_PANIC);
    assert!(!session.input_enabled());

    // Any key dismisses and is not typed into the buffer.
    assert_eq!(session.handle_key(KeyInput::Char('y')), Directive::Continue);
    assert_eq!(log_texts(&session), vec![DISMISS_TEXT.to_string()]);
    assert!(session.input().is_empty());
    assert!(session.input_enabled());
}

#[tokio::test(start_paused = true)]
async fn matrix_click_after_arming_cancels_task() {
    let mut session = Session::new();
    let Directive::StartEffect { id, kind } = type_and_submit(&mut session, "matrix") else {
        panic!("matrix should start an effect");
    };
    let (tx, mut rx) = effect_channel();
    let handle = spawn_effect(id, kind, EffectsConfig::default(), (40, 12), tx);

    loop {
        let envelope = rx.recv().await.expect("matrix keeps running");
        let armed = envelope.event == EffectEvent::Armed;
        session.apply_effect_event(envelope);
        if armed {
            break;
        }
    }

    assert_eq!(session.dismiss(), Directive::CancelEffect(id));
    handle.cancel();
    while let Some(envelope) = rx.recv().await {
        let finished = envelope.event == EffectEvent::Finished;
        // Late frames after dismissal must not reopen the overlay.
        assert!(!session.apply_effect_event(envelope));
        if finished {
            break;
        }
    }
    assert_eq!(session.overlay(), &Overlay::None);
}

#[test]
fn line_mode_transcript() {
    let mut session = Session::new();
    let mut out = Vec::new();
    run_lines(&mut session, "help\nsudo\nexit\nhelp\n".as_bytes(), &mut out, "> ")
        .expect("in-memory io");
    let out = String::from_utf8(out).expect("utf8");
    assert!(out.starts_with("> help\nAvailable commands:"));
    assert!(out.ends_with("> exit\n"));
    assert_eq!(session.history().len(), 3);
}
