//! Random password generation from letter, digit and symbol classes.
//!
//! [`pass::generate`] is the UI-independent core; the `cli` and `tui`
//! modules are the two front ends shipped with the `securepass` binary.

pub mod cli;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;
