//! Binding generation for remote stored-routine packages.
//!
//! Turns the argument catalog of one package into a Rust source file with one
//! typed callable per routine overload and calling convention.
//!
//! # Pipeline
//!
//! 1. [`grouper`] partitions catalog rows by `(routine, overload)`
//! 2. [`type_map`] resolves remote types to bind kinds and local types
//! 3. [`signature`] decides return shape and exposed parameters
//! 4. [`composite`] declares output holders
//! 5. [`body`] lowers each signature to call instructions
//! 6. [`assembler`] collects everything under the package container
//! 7. [`render`] and [`template_engine`] print the file
//!
//! [`PackageGenerator`] runs the whole pipeline.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod assembler;
pub mod body;
pub mod common;
pub mod composite;
pub mod generator;
pub mod grouper;
pub mod render;
pub mod signature;
pub mod template_engine;
pub mod type_map;

pub use common::{GeneratedCode, GeneratedFile};
pub use generator::PackageGenerator;
