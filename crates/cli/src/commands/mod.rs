//! Subcommand implementations.
//!
//! Output goes to stdout as plain text; logs go to stderr.

pub mod color;
pub mod prefs;
pub mod shop;
