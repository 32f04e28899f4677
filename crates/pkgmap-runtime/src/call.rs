//! Procedure call construction.

use crate::{BindKind, CallError, Value};

/// How a parameter moves data across the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterDirection {
    /// Sent to the routine
    Input,
    /// Received from the routine
    Output,
    /// Sent and received
    InputOutput,
    /// Function return value
    ReturnValue,
}

impl ParameterDirection {
    /// Returns `true` if the driver writes a value back.
    #[must_use]
    pub const fn receives(&self) -> bool {
        !matches!(self, Self::Input)
    }
}

/// A single bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Remote argument name; empty for the return value
    pub name: String,
    /// Wire type
    pub kind: BindKind,
    /// Direction of data flow
    pub direction: ParameterDirection,
    /// Declared buffer size, when the remote type has one
    pub size: Option<u32>,
    /// Bound or returned value
    pub value: Value,
}

/// A call to a remote routine with its bound parameters.
///
/// Parameters are kept in bind order; drivers bind them positionally by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    target: String,
    parameters: Vec<Parameter>,
}

impl ProcedureCall {
    /// Creates a call to the given `OWNER.PACKAGE.ROUTINE` target.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            parameters: Vec::new(),
        }
    }

    /// Returns the call target.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Binds the function return value.
    pub fn bind_return(&mut self, kind: BindKind) {
        self.push(String::new(), kind, ParameterDirection::ReturnValue, None, Value::Null);
    }

    /// Binds an input parameter.
    pub fn bind_input(
        &mut self,
        name: impl Into<String>,
        kind: BindKind,
        size: Option<u32>,
        value: Value,
    ) {
        self.push(name.into(), kind, ParameterDirection::Input, size, value);
    }

    /// Binds an output parameter with no initial value.
    pub fn bind_output(&mut self, name: impl Into<String>, kind: BindKind, size: Option<u32>) {
        self.push(name.into(), kind, ParameterDirection::Output, size, Value::Null);
    }

    /// Binds an input-output parameter.
    pub fn bind_in_out(
        &mut self,
        name: impl Into<String>,
        kind: BindKind,
        size: Option<u32>,
        value: Value,
    ) {
        self.push(name.into(), kind, ParameterDirection::InputOutput, size, value);
    }

    fn push(
        &mut self,
        name: String,
        kind: BindKind,
        direction: ParameterDirection,
        size: Option<u32>,
        value: Value,
    ) {
        tracing::trace!(target = %self.target, name = %name, %kind, ?direction, "bind");
        self.parameters.push(Parameter {
            name,
            kind,
            direction,
            size,
            value,
        });
    }

    /// Returns the bound parameters in bind order.
    #[must_use]
    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the bound parameters for a driver to fill in.
    #[inline]
    pub fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    /// Stores a value for a named parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::UnknownParameter`] if no parameter has that name.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), CallError> {
        let slot = self
            .parameters
            .iter_mut()
            .find(|p| p.direction != ParameterDirection::ReturnValue && p.name == name)
            .ok_or_else(|| CallError::UnknownParameter {
                name: name.to_string(),
            })?;
        slot.value = value;
        Ok(())
    }

    /// Stores the function return value.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::MissingReturnValue`] if no return value is bound.
    pub fn set_return_value(&mut self, value: Value) -> Result<(), CallError> {
        let slot = self
            .parameters
            .iter_mut()
            .find(|p| p.direction == ParameterDirection::ReturnValue)
            .ok_or(CallError::MissingReturnValue)?;
        slot.value = value;
        Ok(())
    }

    /// Returns the value of a named parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::UnknownParameter`] if no parameter has that name.
    pub fn value(&self, name: &str) -> Result<&Value, CallError> {
        self.parameters
            .iter()
            .find(|p| p.direction != ParameterDirection::ReturnValue && p.name == name)
            .map(|p| &p.value)
            .ok_or_else(|| CallError::UnknownParameter {
                name: name.to_string(),
            })
    }

    /// Returns the function return value.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::MissingReturnValue`] if no return value is bound.
    pub fn return_value(&self) -> Result<&Value, CallError> {
        self.parameters
            .iter()
            .find(|p| p.direction == ParameterDirection::ReturnValue)
            .map(|p| &p.value)
            .ok_or(CallError::MissingReturnValue)
    }
}
