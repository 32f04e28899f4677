//! Driver seams.

use crate::{CallError, ProcedureCall};
use async_trait::async_trait;

/// Blocking driver connection.
///
/// `execute` runs the call and writes every output, input-output and return
/// value back into the call's parameters.
pub trait Connection {
    /// Executes the call.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Execution`] when the driver or the server fails.
    fn execute(&mut self, call: &mut ProcedureCall) -> Result<(), CallError>;
}

/// Asynchronous driver connection.
///
/// Same contract as [`Connection`], awaited.
#[async_trait]
pub trait AsyncConnection: Send {
    /// Executes the call.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Execution`] when the driver or the server fails.
    async fn execute(&mut self, call: &mut ProcedureCall) -> Result<(), CallError>;
}
