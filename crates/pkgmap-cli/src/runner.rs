//! Command execution and runtime logic.
//!
//! Contains command dispatch, exit code mapping, and logging initialization.

use anyhow::Result;
use pkgmap_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::config::Overrides;

/// Initializes logging infrastructure.
///
/// `--verbose` forces the debug level; otherwise `RUST_LOG` decides, falling
/// back to info. Logs go to stderr so generated source can be piped.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            catalog,
            owner,
            package,
            namespace,
            sync,
            async_,
            strict_types,
            output,
            stdout,
            config,
        } => {
            let flags = Overrides {
                owner,
                package,
                namespace,
                sync,
                async_,
                strict_types,
                output,
                stdout,
            };
            commands::generate::run(&catalog, config.as_deref(), &flags, output_format).await
        }
        Commands::Inspect {
            catalog,
            owner,
            package,
        } => commands::inspect::run(&catalog, &owner, &package, output_format).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}

/// Maps a failed command to its exit code.
///
/// Errors caused by the caller's input (configuration, catalog content,
/// unmappable types) yield [`ExitCode::INVALID_INPUT`]; everything else
/// yields [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let invalid_input = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<pkgmap_core::Error>())
        .any(|cause| {
            cause.is_config_error()
                || cause.is_validation_error()
                || cause.is_catalog_error()
                || cause.is_empty_catalog()
                || cause.is_unmapped_bind_type()
                || cause.is_unmapped_local_type()
        });

    if invalid_input {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}
