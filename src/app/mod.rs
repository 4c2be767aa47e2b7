//! Binary-local application orchestration helpers.
//!
//! The main binary keeps wiring logic in `entry`, while this module hosts the
//! interactive loop and its effect bookkeeping.

pub(crate) mod entry;
pub(crate) mod interactive;
pub(crate) mod startup;
pub(crate) mod tasks;
