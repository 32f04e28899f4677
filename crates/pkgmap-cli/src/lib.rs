//! pkgmap CLI library.
//!
//! Argument definitions, command implementations, and output formatters of
//! the `pkgmap` binary, exposed so they can be tested.

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands};
