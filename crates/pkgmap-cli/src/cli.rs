//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pkgmap - typed bindings for stored-procedure packages.
///
/// Reads a routine-argument catalog exported from the database and
/// generates one Rust module per package.
#[derive(Parser, Debug)]
#[command(name = "pkgmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate bindings for one package.
    ///
    /// Loads the catalog, resolves overloads and types, and writes the
    /// rendered module under the output directory at the path derived from
    /// the namespace.
    ///
    /// # Examples
    ///
    /// ```bash
    /// pkgmap generate --catalog rows.json --owner APP --package ORDERS_PKG \
    ///     --namespace db::orders --async --output src/
    /// ```
    Generate {
        /// Catalog file (JSON array of argument rows)
        #[arg(long)]
        catalog: PathBuf,

        /// Schema that owns the package
        #[arg(long)]
        owner: Option<String>,

        /// Package to bind
        #[arg(long)]
        package: Option<String>,

        /// Module path of the generated file (e.g. `db::orders`)
        #[arg(long)]
        namespace: Option<String>,

        /// Emit the synchronous convention
        #[arg(long)]
        sync: bool,

        /// Emit the asynchronous convention
        #[arg(long = "async")]
        async_: bool,

        /// Fail on remote types without a local mapping
        #[arg(long)]
        strict_types: bool,

        /// Directory the generated file is written under
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Configuration file (TOML)
        #[arg(short, long, env = "PKGMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Show how a package's routines resolve, without rendering.
    ///
    /// Prints one row per callable: routine, overload, parameters, return
    /// shape, output holder, and whether the body is a stub.
    Inspect {
        /// Catalog file (JSON array of argument rows)
        #[arg(long)]
        catalog: PathBuf,

        /// Schema that owns the package
        #[arg(long)]
        owner: String,

        /// Package to inspect
        #[arg(long)]
        package: String,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// pkgmap completions bash > /etc/bash_completion.d/pkgmap
    /// pkgmap completions zsh > ~/.zsh/completions/_pkgmap
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
