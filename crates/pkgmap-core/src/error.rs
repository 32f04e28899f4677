//! Error types for pkgmap.
//!
//! A single error hierarchy is shared by the catalog reader, the generator,
//! and the CLI. Generation is a single deterministic pass, so every error is
//! terminal for the run that produced it.
//!
//! # Examples
//!
//! ```
//! use pkgmap_core::{Error, Result};
//!
//! fn require_rows(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(Error::EmptyCatalog);
//!     }
//!     Ok(())
//! }
//!
//! let err = require_rows(0).unwrap_err();
//! assert!(err.is_empty_catalog());
//! ```

use thiserror::Error;

/// Main error type for pkgmap.
///
/// All library errors use this type, providing consistent error handling
/// across the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// The argument catalog contained no rows.
    ///
    /// Generating a package from zero routines is a caller error, never an
    /// empty package.
    #[error("argument catalog is empty")]
    EmptyCatalog,

    /// An overload group was built from zero descriptors.
    #[error("overload group for routine '{routine}' has no arguments")]
    EmptyGroup {
        /// Routine name of the offending group
        routine: String,
    },

    /// A remote type has no bind kind and cannot be parsed as one.
    ///
    /// This is fatal for the whole run.
    #[error("no such bind kind for remote type '{data_type}' (routine '{routine}', argument '{argument}')")]
    UnmappedBindType {
        /// Routine that declares the argument
        routine: String,
        /// Argument name, or `<return>` for the return slot
        argument: String,
        /// Declared remote type name
        data_type: String,
    },

    /// A remote type has no local type mapping.
    ///
    /// Only raised when strict type checking is enabled; otherwise the
    /// generator emits a placeholder.
    #[error("remote type '{data_type}' has no local type mapping (routine '{routine}')")]
    UnmappedLocalType {
        /// Routine that declares the argument
        routine: String,
        /// Declared remote type name
        data_type: String,
    },

    /// Catalog rows are malformed or inconsistent.
    #[error("invalid catalog: {message}")]
    InvalidCatalog {
        /// Description of the problem
        message: String,
    },

    /// Reading a catalog file failed.
    #[error("failed to read catalog '{path}'")]
    CatalogReadFailed {
        /// Path that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization or template rendering error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Returns `true` if the catalog was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgmap_core::Error;
    ///
    /// assert!(Error::EmptyCatalog.is_empty_catalog());
    /// ```
    #[must_use]
    pub const fn is_empty_catalog(&self) -> bool {
        matches!(self, Self::EmptyCatalog)
    }

    /// Returns `true` if a remote type could not be resolved to a bind kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgmap_core::Error;
    ///
    /// let err = Error::UnmappedBindType {
    ///     routine: "ADD_ITEM".to_string(),
    ///     argument: "P_DOC".to_string(),
    ///     data_type: "SDO_GEOMETRY".to_string(),
    /// };
    /// assert!(err.is_unmapped_bind_type());
    /// ```
    #[must_use]
    pub const fn is_unmapped_bind_type(&self) -> bool {
        matches!(self, Self::UnmappedBindType { .. })
    }

    /// Returns `true` if a remote type has no local type mapping.
    #[must_use]
    pub const fn is_unmapped_local_type(&self) -> bool {
        matches!(self, Self::UnmappedLocalType { .. })
    }

    /// Returns `true` if the catalog is malformed or could not be read.
    #[must_use]
    pub const fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCatalog { .. } | Self::CatalogReadFailed { .. } | Self::EmptyGroup { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgmap_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "owner is required".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

/// Result type alias for pkgmap operations.
///
/// # Examples
///
/// ```
/// use pkgmap_core::{Error, Result};
///
/// fn package_name(raw: &str) -> Result<&str> {
///     if raw.is_empty() {
///         return Err(Error::ConfigError {
///             message: "package name is required".to_string(),
///         });
///     }
///     Ok(raw)
/// }
///
/// assert!(package_name("ORDERS_PKG").is_ok());
/// assert!(package_name("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
