//! Scripted `rm -rf /` parody.
//!
//! The sequence is plain data so the task runner, the line-mode front end,
//! and tests all walk the same steps.

use super::{EffectEvent, ARM_DELAY};
use std::time::Duration;

/// Paths "removed" one per step, in order.
pub const FAKE_PATHS: [&str; 10] = [
    "/bin/bash",
    "/etc/passwd",
    "/home/visitor/about.txt",
    "/home/visitor/projects/",
    "/usr/lib/libsystem.so",
    "/var/log/syslog",
    "/boot/vmlinuz",
    "/System/Library/CoreServices",
    "/home/visitor/.bashrc",
    "/usr/bin/node",
];

pub const CRITICAL_FAILURE: &str = "ERROR: Critical system failure";
pub const KERNEL_PANIC: &str = "KERNEL PANIC: Unable to mount root fs";
/// Line left behind once the user dismisses the crash screen.
pub const DISMISS_TEXT: &str = "Congrats hackerman, you broke nothing.";

const GLITCH_DELAY: Duration = Duration::from_millis(300);
const PANIC_DELAY: Duration = Duration::from_millis(500);
const CORRUPT_DELAY: Duration = Duration::from_millis(800);

/// One scripted event and how long to wait before emitting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeStep {
    pub delay: Duration,
    pub event: EffectEvent,
}

impl WipeStep {
    fn after(delay: Duration, event: EffectEvent) -> Self {
        Self { delay, event }
    }
}

pub fn removing_line(path: &str) -> String {
    format!("removing {path}...")
}

/// Build the full sequence with `step` between `removing` lines.
///
/// The first line is immediate. The glitch starts one `step` plus a short
/// pause after the last line.
pub fn script(step: Duration) -> Vec<WipeStep> {
    let mut steps: Vec<WipeStep> = FAKE_PATHS
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let delay = if idx == 0 { Duration::ZERO } else { step };
            WipeStep::after(delay, EffectEvent::Line(removing_line(path)))
        })
        .collect();

    steps.push(WipeStep::after(step + GLITCH_DELAY, EffectEvent::Glitch));
    steps.push(WipeStep::after(
        Duration::ZERO,
        EffectEvent::Line(CRITICAL_FAILURE.to_string()),
    ));
    steps.push(WipeStep::after(
        PANIC_DELAY,
        EffectEvent::Line(KERNEL_PANIC.to_string()),
    ));
    steps.push(WipeStep::after(CORRUPT_DELAY, EffectEvent::Corrupted));
    steps.push(WipeStep::after(ARM_DELAY, EffectEvent::Armed));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_duration(step: Duration) -> Duration {
        script(step).iter().map(|s| s.delay).sum()
    }

    #[test]
    fn script_removes_every_path_then_crashes() {
        let steps = script(Duration::from_millis(150));
        let lines: Vec<&str> = steps
            .iter()
            .filter_map(|s| match &s.event {
                EffectEvent::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), FAKE_PATHS.len() + 2);
        assert_eq!(lines[0], "removing /bin/bash...");
        assert_eq!(lines[9], "removing /usr/bin/node...");
        assert_eq!(lines[10], CRITICAL_FAILURE);
        assert_eq!(lines[11], KERNEL_PANIC);
    }

    #[test]
    fn script_ends_armed_after_corruption() {
        let steps = script(Duration::from_millis(150));
        let tail: Vec<&EffectEvent> = steps.iter().rev().take(2).map(|s| &s.event).collect();
        assert_eq!(tail, vec![&EffectEvent::Armed, &EffectEvent::Corrupted]);
        assert_eq!(steps[0].delay, Duration::ZERO);
    }

    #[test]
    fn glitch_precedes_failure_line() {
        let steps = script(Duration::from_millis(150));
        let glitch = steps
            .iter()
            .position(|s| s.event == EffectEvent::Glitch)
            .expect("glitch step");
        assert_eq!(
            steps[glitch + 1].event,
            EffectEvent::Line(CRITICAL_FAILURE.to_string())
        );
    }

    #[test]
    fn duration_scales_with_step() {
        // 9 gaps between lines, one extra step before the glitch, then fixed pauses.
        assert_eq!(
            script_duration(Duration::from_millis(150)),
            Duration::from_millis(150 * 10 + 300 + 500 + 800 + 100)
        );
        assert_eq!(
            script_duration(Duration::from_millis(10)),
            Duration::from_millis(10 * 10 + 300 + 500 + 800 + 100)
        );
    }
}
