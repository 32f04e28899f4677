//! Inspect command implementation.
//!
//! Resolves a package the same way `generate` does, with both calling
//! conventions, and reports the callable table instead of rendering it.

use super::common::load_package_rows;
use anyhow::{Context, Result};
use pkgmap_codegen::PackageGenerator;
use pkgmap_codegen::assembler::CallableSummary;
use pkgmap_core::GenerationConfig;
use pkgmap_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Placeholder module path; inspection never writes a file.
const INSPECT_NAMESPACE: &str = "bindings";

/// Resolved overload table of one package.
#[derive(Debug, Serialize)]
struct InspectionResult {
    owner: String,
    package: String,
    /// Container type the callables live on
    container: String,
    /// Output holder types
    holders: Vec<String>,
    callables: Vec<CallableSummary>,
    unsupported: usize,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the package cannot be
/// resolved.
pub async fn run(
    catalog: &Path,
    owner: &str,
    package: &str,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = GenerationConfig::builder()
        .owner(owner)
        .package(package)
        .namespace(INSPECT_NAMESPACE)
        .emit_sync(true)
        .emit_async(true)
        .build()?;

    let rows = load_package_rows(catalog, owner, package).await?;

    let generator = PackageGenerator::new().context("failed to create package generator")?;
    let declaration = generator.assemble(&rows, &config)?;

    let result = InspectionResult {
        owner: declaration.owner.clone(),
        package: declaration.package.clone(),
        container: declaration.container.clone(),
        holders: declaration.holders.iter().map(|h| h.name.clone()).collect(),
        callables: declaration.summary(),
        unsupported: declaration.unsupported_count(),
    };

    info!(
        "Resolved {} callables for {owner}.{package}",
        result.callables.len()
    );

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
