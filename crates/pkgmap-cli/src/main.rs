//! pkgmap command-line interface.
//!
//! Generates typed Rust bindings for stored-procedure packages from an
//! exported routine-argument catalog.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Render one package's bindings module
//! - `inspect` - Show how a package's routines resolve
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Write db/orders/orders_pkg.rs under src/
//! pkgmap generate --catalog rows.json --owner APP --package ORDERS_PKG \
//!     --namespace db::orders --output src
//!
//! # Review overload resolution
//! pkgmap inspect --catalog rows.json --owner APP --package ORDERS_PKG --format text
//! ```

use anyhow::Result;
use clap::Parser;
use pkgmap_cli::Cli;
use pkgmap_cli::runner::{execute_command, exit_code_for, init_logging};
use pkgmap_core::cli::{ExitCode, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(ExitCode::INVALID_INPUT.as_i32());
        }
    };

    let exit_code = match execute_command(cli.command, output_format).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}
