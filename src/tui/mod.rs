//! Terminal user-interface building blocks.
//!
//! This module hosts the edit line, key mapping, and the full-screen
//! renderer. Session state lives in `crate::session`; nothing here decides
//! what a key means beyond translating it.

pub mod input;
mod input_buffer;
pub mod renderer;
pub mod settings;
pub mod text;

pub use input::{map_key, spawn_key_reader, KeyReader, TermEvent, TerminalGuard};
pub use input_buffer::InputLine;
pub use renderer::{layout_screen, Renderer};
