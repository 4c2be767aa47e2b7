//! pseudoterm: a decorative fake terminal.
//!
//! The crate splits into a pure core and two front ends:
//!
//! - [`commands`] maps trimmed, lowercased input to canned responses.
//! - [`history`] keeps submitted lines with an Up/Down cursor.
//! - [`session`] owns all widget state and turns keys into [`session::Directive`]s.
//! - [`effects`] runs the matrix screensaver and the `rm -rf /` parody as tasks.
//! - [`tui`] and [`line_mode`] put a session on a terminal or a pipe.
//!
//! # Quick start
//!
//! ```
//! use pseudoterm::session::{Directive, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.submit_line("sudo"), Directive::Continue);
//! assert_eq!(session.log().len(), 2);
//! assert_eq!(session.submit_line("exit"), Directive::Quit);
//! ```

pub mod commands;
pub mod config;
pub mod effects;
pub mod error;
pub mod history;
pub mod line_mode;
pub mod logging;
pub mod output;
pub mod session;
pub mod tui;
