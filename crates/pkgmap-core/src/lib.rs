//! Core types, configuration, and errors for pkgmap.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace: the argument descriptors read from the remote catalog, the
//! generation configuration, and the error hierarchy.
//!
//! # Architecture
//!
//! The core consists of:
//! - Catalog domain types (`ArgumentDescriptor`, `Direction`)
//! - Strong identifier types (`RoutineId`, `Namespace`)
//! - Error hierarchy with contextual information
//! - Generation configuration (`GenerationConfig`)
//! - CLI value types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod descriptor;
mod error;
mod types;

pub mod cli;

pub use config::{GenerationConfig, GenerationConfigBuilder};
pub use descriptor::{ArgumentDescriptor, Direction};
pub use error::{Error, Result};
pub use types::{Namespace, RoutineId};
