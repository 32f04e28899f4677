//! Call surface for bindings generated by pkgmap.
//!
//! Generated package bindings build a [`ProcedureCall`], bind parameters with
//! a [`BindKind`], hand the call to a [`Connection`] or [`AsyncConnection`]
//! and read the bound [`Value`]s back. Drivers implement the two connection
//! traits; this crate ships no driver.
//!
//! # Examples
//!
//! ```
//! use pkgmap_runtime::{BindKind, CallError, Connection, ProcedureCall, Value};
//!
//! struct Echo;
//!
//! impl Connection for Echo {
//!     fn execute(&mut self, call: &mut ProcedureCall) -> Result<(), CallError> {
//!         let input = call.value("P_IN")?.clone();
//!         call.set_value("P_OUT", input)
//!     }
//! }
//!
//! let mut call = ProcedureCall::new("APP.PKG.ECHO");
//! call.bind_input("P_IN", BindKind::Varchar2, Some(10), Value::from("hi"));
//! call.bind_output("P_OUT", BindKind::Varchar2, Some(10));
//! Echo.execute(&mut call).unwrap();
//!
//! assert_eq!(call.value("P_OUT").unwrap().to_text().unwrap(), "hi");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod bind_kind;
mod call;
mod connection;
mod error;
mod value;

pub use bind_kind::BindKind;
pub use call::{Parameter, ParameterDirection, ProcedureCall};
pub use chrono::NaiveDateTime;
pub use connection::{AsyncConnection, Connection};
pub use error::CallError;
pub use rust_decimal::Decimal;
pub use value::{RefCursor, Value};

/// Placeholder for a remote type without a local mapping.
///
/// Generated bindings use this macro where a type or conversion could not be
/// mapped, so the generated file refuses to compile with a message naming
/// the remote type instead of silently using a wrong type.
#[macro_export]
macro_rules! unmapped {
    ($remote:literal) => {
        compile_error!(concat!(
            "remote type `",
            $remote,
            "` has no local mapping; extend the pkgmap type table"
        ))
    };
}
