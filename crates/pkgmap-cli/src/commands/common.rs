//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use pkgmap_catalog::Catalog;
use pkgmap_core::ArgumentDescriptor;
use std::path::Path;
use tracing::info;

/// Loads a catalog file and selects the rows of one package.
///
/// Rows come back ordered by position, as the generator expects.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed.
pub async fn load_package_rows(
    catalog: &Path,
    owner: &str,
    package: &str,
) -> Result<Vec<ArgumentDescriptor>> {
    let catalog = Catalog::load_file(catalog)
        .await
        .with_context(|| format!("failed to load catalog {}", catalog.display()))?;

    let rows = catalog.for_package(owner, package);
    info!(
        "Selected {} of {} catalog rows for {owner}.{package}",
        rows.len(),
        catalog.len()
    );
    Ok(rows)
}
