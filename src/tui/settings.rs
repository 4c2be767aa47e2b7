//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak colors, glyphs, and polling cadence.
//! Effect timings are configurable and live in `config`.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// How long the key reader blocks in `event::poll` before rechecking its stop flag.
pub const REPL_EVENT_POLL_MS: u64 = 80;

/// Fallback terminal size when the real size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// Characters sprinkled over the log while the wipe parody is corrupted.
pub const NOISE_GLYPHS: [char; 8] = ['#', '%', '&', '@', '▓', '▒', '░', '█'];

/// One in this many visible cells is replaced with noise when corrupted.
pub const NOISE_ONE_IN: u32 = 6;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT: Color = Color::Green;
pub const COLOR_COMMAND: Color = Color::White;
pub const COLOR_RESPONSE: Color = Color::Grey;

pub const COLOR_GLITCH: Color = Color::Red;
pub const COLOR_CORRUPTED: Color = Color::DarkRed;

pub const COLOR_MATRIX_HEAD: Color = Color::Rgb {
    r: 200,
    g: 255,
    b: 200,
};
pub const COLOR_MATRIX_TRAIL: Color = Color::Rgb { r: 0, g: 255, b: 70 };
pub const COLOR_MATRIX_FADED: Color = Color::Rgb { r: 0, g: 110, b: 30 };

/// Trail cells older than this many ticks use the faded color.
pub const MATRIX_FADE_AGE: u8 = 10;
