//! Command implementations for the pkgmap CLI.
//!
//! Each command module resolves its inputs, runs the operation, and formats
//! output according to the requested format.

pub mod common;
pub mod completions;
pub mod config;
pub mod generate;
pub mod inspect;
