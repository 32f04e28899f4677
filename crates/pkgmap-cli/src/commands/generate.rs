//! Generate command implementation.
//!
//! Produces the bindings module of one package:
//! 1. Merges command-line flags over the optional config file
//! 2. Loads the catalog and selects the package's rows
//! 3. Assembles and renders the package declaration
//! 4. Writes the file under the output directory, or prints it

use super::common::load_package_rows;
use super::config::{Config, Destination, Overrides, load_config};
use anyhow::{Context, Result};
use pkgmap_codegen::PackageGenerator;
use pkgmap_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a generation run.
#[derive(Debug, Serialize)]
struct GenerationResult {
    /// Owner and package, as `OWNER.PACKAGE`
    package: String,
    /// Module path of the generated file
    namespace: String,
    /// Where the file was written, or `-` for stdout
    file: String,
    /// Number of callables emitted
    callables: usize,
    /// Number of callables emitted as stubs
    unsupported: usize,
    /// Emitted conventions
    variants: Vec<&'static str>,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if the configuration is incomplete, the catalog cannot
/// be loaded, generation fails, or the output cannot be written.
pub async fn run(
    catalog: &Path,
    config_path: Option<&Path>,
    flags: &Overrides,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let file_config = match config_path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let config = file_config.resolve(flags)?;
    let destination = file_config.destination(flags);

    info!(
        "Generating {}.{} from {}",
        config.owner,
        config.package,
        catalog.display()
    );

    let rows = load_package_rows(catalog, &config.owner, &config.package).await?;

    let generator = PackageGenerator::new().context("failed to create package generator")?;
    let declaration = generator.assemble(&rows, &config)?;
    let file = generator.render(&declaration)?;

    let written = match destination {
        Destination::Stdout => {
            print!("{}", file.content());
            None
        }
        Destination::Directory(dir) => Some(write_file(&dir, file.path(), file.content()).await?),
    };

    let mut variants = Vec::new();
    if config.emit_sync {
        variants.push("sync");
    }
    if config.emit_async {
        variants.push("async");
    }

    let result = GenerationResult {
        package: format!("{}.{}", config.owner, config.package),
        namespace: config.namespace.to_string(),
        file: written
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.display().to_string()),
        callables: declaration.callables.len(),
        unsupported: declaration.unsupported_count(),
        variants,
    };

    info!(
        "Successfully generated {} callables ({} unsupported) for {}",
        result.callables, result.unsupported, result.package
    );

    // Keep stdout clean for the generated source.
    if written.is_none() {
        return Ok(ExitCode::SUCCESS);
    }

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Writes `content` to `dir/relative`, creating parent directories.
async fn write_file(dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(path)
}
