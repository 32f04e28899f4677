//! Generation configuration.
//!
//! Caller-facing parameters of a generation run: which package to bind,
//! where the bindings live, and which calling conventions to emit. None of
//! this comes from the catalog.
//!
//! # Examples
//!
//! ```
//! use pkgmap_core::GenerationConfig;
//!
//! let config = GenerationConfig::builder()
//!     .owner("APP")
//!     .package("ORDERS_PKG")
//!     .namespace("db::orders")
//!     .emit_async(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.emit_sync);
//! assert!(config.emit_async);
//! assert!(config.emits_both());
//! ```

use crate::{Error, Namespace, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Schema that owns the package.
    pub owner: String,

    /// Remote package to bind.
    pub package: String,

    /// Module path the generated file is placed under.
    pub namespace: Namespace,

    /// Emit the synchronous calling convention.
    ///
    /// Default: true
    pub emit_sync: bool,

    /// Emit the asynchronous calling convention.
    ///
    /// When both conventions are emitted, asynchronous callables carry an
    /// `_async` suffix.
    /// Default: false
    pub emit_async: bool,

    /// Fail the run on remote types without a local mapping instead of
    /// emitting a placeholder.
    ///
    /// Default: false
    pub strict_types: bool,
}

impl GenerationConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Returns `true` when both calling conventions are requested.
    #[must_use]
    pub const fn emits_both(&self) -> bool {
        self.emit_sync && self.emit_async
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - Owner or package is blank
    /// - Neither calling convention is selected
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgmap_core::GenerationConfig;
    ///
    /// let mut config = GenerationConfig::builder()
    ///     .owner("APP")
    ///     .package("PKG")
    ///     .namespace("db")
    ///     .build()
    ///     .unwrap();
    /// assert!(config.validate().is_ok());
    ///
    /// config.emit_sync = false;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "owner cannot be empty".to_string(),
            });
        }

        if self.package.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "package cannot be empty".to_string(),
            });
        }

        if !self.emit_sync && !self.emit_async {
            return Err(Error::ConfigError {
                message: "at least one of the synchronous or asynchronous variants must be enabled"
                    .to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GenerationConfig`].
#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    owner: Option<String>,
    package: Option<String>,
    namespace: Option<String>,
    emit_sync: bool,
    emit_async: bool,
    strict_types: bool,
}

impl Default for GenerationConfigBuilder {
    fn default() -> Self {
        Self {
            owner: None,
            package: None,
            namespace: None,
            emit_sync: true,
            emit_async: false,
            strict_types: false,
        }
    }
}

impl GenerationConfigBuilder {
    /// Sets the owning schema.
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the package name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Sets the target namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Enables or disables the synchronous variant.
    #[must_use]
    pub const fn emit_sync(mut self, enabled: bool) -> Self {
        self.emit_sync = enabled;
        self
    }

    /// Enables or disables the asynchronous variant.
    #[must_use]
    pub const fn emit_async(mut self, enabled: bool) -> Self {
        self.emit_async = enabled;
        self
    }

    /// Enables or disables strict local type checking.
    #[must_use]
    pub const fn strict_types(mut self, enabled: bool) -> Self {
        self.strict_types = enabled;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the namespace is not a
    /// valid module path, or [`GenerationConfig::validate`] fails.
    pub fn build(self) -> Result<GenerationConfig> {
        let owner = self.owner.ok_or_else(|| Error::ConfigError {
            message: "owner is required".to_string(),
        })?;
        let package = self.package.ok_or_else(|| Error::ConfigError {
            message: "package is required".to_string(),
        })?;
        let namespace = self.namespace.ok_or_else(|| Error::ConfigError {
            message: "namespace is required".to_string(),
        })?;

        let config = GenerationConfig {
            owner,
            package,
            namespace: Namespace::new(namespace)?,
            emit_sync: self.emit_sync,
            emit_async: self.emit_async,
            strict_types: self.strict_types,
        };
        config.validate()?;

        tracing::debug!(
            owner = %config.owner,
            package = %config.package,
            namespace = %config.namespace,
            "generation config built"
        );

        Ok(config)
    }
}
