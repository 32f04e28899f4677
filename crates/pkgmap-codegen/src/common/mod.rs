//! Code shared by every pipeline stage.

pub mod naming;
pub mod types;

pub use types::{GeneratedCode, GeneratedFile};
