//! Configuration file support.
//!
//! `pkgmap.toml` carries defaults for `generate`; flags given on the command
//! line take precedence over every value read from the file.
//!
//! ```toml
//! [generation]
//! owner = "APP"
//! package = "ORDERS_PKG"
//! namespace = "db::orders"
//! sync = true
//! async = true
//! strict_types = false
//!
//! [output]
//! dir = "src"
//! ```

use anyhow::{Context, Result};
use pkgmap_core::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of a `pkgmap.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Generation settings
    #[serde(default)]
    pub generation: GenerationSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[generation]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GenerationSection {
    /// Schema that owns the package
    pub owner: Option<String>,
    /// Package to bind
    pub package: Option<String>,
    /// Module path of the generated file
    pub namespace: Option<String>,
    /// Emit the synchronous convention
    pub sync: Option<bool>,
    /// Emit the asynchronous convention
    #[serde(rename = "async")]
    pub async_: Option<bool>,
    /// Fail on unmapped local types
    pub strict_types: Option<bool>,
}

/// The `[output]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutputSection {
    /// Directory the generated file is written under
    pub dir: Option<PathBuf>,
    /// Print the generated file instead of writing it
    pub stdout: Option<bool>,
}

/// Generation settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Overrides {
    /// `--owner`
    pub owner: Option<String>,
    /// `--package`
    pub package: Option<String>,
    /// `--namespace`
    pub namespace: Option<String>,
    /// `--sync`
    pub sync: bool,
    /// `--async`
    pub async_: bool,
    /// `--strict-types`
    pub strict_types: bool,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--stdout`
    pub stdout: bool,
}

/// Where the rendered file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Written under this directory
    Directory(PathBuf),
    /// Printed to standard output
    Stdout,
}

/// Loads a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

impl Config {
    /// Merges command-line flags over this file into a generation config.
    ///
    /// If either `--sync` or `--async` is given, exactly the given
    /// conventions are emitted. Otherwise the file decides, and keys it
    /// leaves out keep the builder defaults.
    ///
    /// # Errors
    ///
    /// Returns [`pkgmap_core::Error::ConfigError`] if owner, package, or
    /// namespace is missing from both sources, or the result is invalid.
    pub fn resolve(&self, flags: &Overrides) -> pkgmap_core::Result<GenerationConfig> {
        let file = &self.generation;
        let mut builder = GenerationConfig::builder();

        if let Some(owner) = flags.owner.clone().or_else(|| file.owner.clone()) {
            builder = builder.owner(owner);
        }
        if let Some(package) = flags.package.clone().or_else(|| file.package.clone()) {
            builder = builder.package(package);
        }
        if let Some(namespace) = flags.namespace.clone().or_else(|| file.namespace.clone()) {
            builder = builder.namespace(namespace);
        }

        if flags.sync || flags.async_ {
            builder = builder.emit_sync(flags.sync).emit_async(flags.async_);
        } else {
            if let Some(sync) = file.sync {
                builder = builder.emit_sync(sync);
            }
            if let Some(async_) = file.async_ {
                builder = builder.emit_async(async_);
            }
        }

        builder
            .strict_types(flags.strict_types || file.strict_types.unwrap_or(false))
            .build()
    }

    /// Picks the output destination; flags win over the `[output]` table.
    #[must_use]
    pub fn destination(&self, flags: &Overrides) -> Destination {
        if flags.stdout {
            return Destination::Stdout;
        }
        if let Some(dir) = &flags.output {
            return Destination::Directory(dir.clone());
        }
        if self.output.stdout.unwrap_or(false) {
            return Destination::Stdout;
        }
        Destination::Directory(self.output.dir.clone().unwrap_or_else(|| PathBuf::from(".")))
    }
}
