//! Errors raised by generated bindings and drivers.

use thiserror::Error;

/// Error type returned by every generated binding.
#[derive(Error, Debug)]
pub enum CallError {
    /// The remote routine has a record-shaped argument the generator could
    /// not bind.
    #[error("routine '{routine}' takes a composite argument and is not implemented")]
    NotImplemented {
        /// Fully qualified routine identifier
        routine: String,
    },

    /// A parameter name was not bound on the call.
    #[error("parameter '{name}' is not bound")]
    UnknownParameter {
        /// Requested parameter name
        name: String,
    },

    /// The call has no return-value parameter.
    #[error("call has no return value bound")]
    MissingReturnValue,

    /// A returned value has a different shape than the binding expects.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Expected value kind
        expected: &'static str,
        /// Actual value kind
        found: &'static str,
    },

    /// A numeric literal is malformed or out of range.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// Offending text
        text: String,
    },

    /// A bind kind token is not recognized.
    #[error("no such bind kind '{token}'")]
    UnknownBindKind {
        /// Offending token
        token: String,
    },

    /// The driver failed to execute the call.
    #[error("execution of '{routine}' failed: {message}")]
    Execution {
        /// Fully qualified routine identifier
        routine: String,
        /// Driver message
        message: String,
        /// Underlying driver error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CallError {
    /// Returns `true` if the routine is not implemented by the bindings.
    #[must_use]
    pub const fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Returns `true` if a value had an unexpected shape.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = CallError::NotImplemented {
            routine: "APP.PKG.SAVE".to_string(),
        };
        assert!(err.is_not_implemented());
        assert!(err.to_string().contains("APP.PKG.SAVE"));
    }

    #[test]
    fn test_execution_source() {
        use std::error::Error as _;

        let err = CallError::Execution {
            routine: "APP.PKG.RUN".to_string(),
            message: "ORA-06550".to_string(),
            source: Some("socket closed".into()),
        };
        assert!(err.source().is_some());
        assert!(!err.is_type_mismatch());
    }
}
