//! Parsed argument catalogs.

use crate::row::ArgumentRow;
use pkgmap_core::{ArgumentDescriptor, Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Maximum catalog file size accepted by [`Catalog::load_file`] (64 MiB).
pub const MAX_CATALOG_SIZE: u64 = 64 * 1024 * 1024;

/// All rows of an exported catalog, in file order.
///
/// A catalog may hold several packages; [`for_package`](Self::for_package)
/// selects one and restores position order.
///
/// # Examples
///
/// ```
/// use pkgmap_catalog::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"[
///     {"OWNER": "APP", "OBJECT_NAME": "F", "PACKAGE_NAME": "PKG",
///      "ARGUMENT_NAME": "P_A", "POSITION": 1, "IN_OUT": "IN", "DATA_TYPE": "NUMBER"},
///     {"OWNER": "APP", "OBJECT_NAME": "F", "PACKAGE_NAME": "PKG",
///      "POSITION": 0, "IN_OUT": "OUT", "DATA_TYPE": "NUMBER"}
/// ]"#).unwrap();
///
/// let rows = catalog.for_package("app", "pkg");
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].is_return_slot());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    rows: Vec<ArgumentDescriptor>,
}

impl Catalog {
    /// Creates a catalog from descriptors.
    #[must_use]
    pub const fn new(rows: Vec<ArgumentDescriptor>) -> Self {
        Self { rows }
    }

    /// Parses a JSON array of catalog rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] for malformed JSON and
    /// [`Error::InvalidCatalog`] for rows with invalid column values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<ArgumentRow> =
            serde_json::from_str(json).map_err(|e| Error::SerializationError {
                message: format!("failed to parse catalog rows: {e}"),
                source: Some(e),
            })?;

        let rows = raw
            .into_iter()
            .map(ArgumentDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rows = rows.len(), "parsed catalog");
        Ok(Self { rows })
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogReadFailed`] if the file cannot be read,
    /// [`Error::InvalidCatalog`] if it exceeds [`MAX_CATALOG_SIZE`], and the
    /// errors of [`from_json_str`](Self::from_json_str).
    pub async fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_failed = |source: std::io::Error| Error::CatalogReadFailed {
            path: path.display().to_string(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(read_failed)?;
        if metadata.len() > MAX_CATALOG_SIZE {
            return Err(Error::InvalidCatalog {
                message: format!(
                    "{} is {} bytes, limit is {MAX_CATALOG_SIZE}",
                    path.display(),
                    metadata.len()
                ),
            });
        }

        let content = tokio::fs::read_to_string(path).await.map_err(read_failed)?;
        tracing::info!("Loaded catalog from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Returns all rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[ArgumentDescriptor] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the catalog has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the distinct `(owner, package)` pairs, sorted.
    #[must_use]
    pub fn packages(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .map(|r| (r.owner.clone(), r.package_name.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the rows of one package ordered by position.
    ///
    /// Matching ignores case. The sort is stable, so rows sharing a position
    /// (one per routine overload) keep their file order.
    #[must_use]
    pub fn for_package(&self, owner: &str, package: &str) -> Vec<ArgumentDescriptor> {
        let mut rows: Vec<ArgumentDescriptor> = self
            .rows
            .iter()
            .filter(|r| r.owner.eq_ignore_ascii_case(owner) && r.package_name.eq_ignore_ascii_case(package))
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.position);

        tracing::debug!(owner, package, rows = rows.len(), "selected package rows");
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = r#"[
        {"OWNER": "APP", "OBJECT_NAME": "GET", "PACKAGE_NAME": "A_PKG",
         "ARGUMENT_NAME": "P_KEY", "POSITION": 1, "IN_OUT": "IN", "DATA_TYPE": "VARCHAR2"},
        {"OWNER": "APP", "OBJECT_NAME": "GET", "PACKAGE_NAME": "A_PKG",
         "POSITION": 0, "IN_OUT": "OUT", "DATA_TYPE": "NUMBER"},
        {"OWNER": "APP", "OBJECT_NAME": "PUT", "PACKAGE_NAME": "A_PKG",
         "ARGUMENT_NAME": "P_VAL", "POSITION": 1, "IN_OUT": "IN", "DATA_TYPE": "NUMBER"},
        {"OWNER": "OPS", "OBJECT_NAME": "RUN", "PACKAGE_NAME": "B_PKG",
         "POSITION": 1, "IN_OUT": "IN"}
    ]"#;

    #[test]
    fn test_parse_rows() {
        let catalog = Catalog::from_json_str(ROWS).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.rows()[0].routine_name, "GET");
    }

    #[test]
    fn test_for_package_orders_by_position() {
        let catalog = Catalog::from_json_str(ROWS).unwrap();
        let rows = catalog.for_package("APP", "A_PKG");

        let order: Vec<_> = rows
            .iter()
            .map(|r| (r.routine_name.as_str(), r.position))
            .collect();
        assert_eq!(order, vec![("GET", 0), ("GET", 1), ("PUT", 1)]);
    }

    #[test]
    fn test_for_package_ignores_case() {
        let catalog = Catalog::from_json_str(ROWS).unwrap();
        assert_eq!(catalog.for_package("ops", "b_pkg").len(), 1);
        assert!(catalog.for_package("APP", "MISSING").is_empty());
    }

    #[test]
    fn test_packages() {
        let catalog = Catalog::from_json_str(ROWS).unwrap();
        assert_eq!(
            catalog.packages(),
            vec![
                ("APP".to_string(), "A_PKG".to_string()),
                ("OPS".to_string(), "B_PKG".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{\"OWNER\": 1}").unwrap_err();
        assert!(matches!(err, Error::SerializationError { source: Some(_), .. }));
    }

    #[test]
    fn test_invalid_direction() {
        let json = r#"[{"OWNER": "APP", "OBJECT_NAME": "F", "PACKAGE_NAME": "P",
                        "POSITION": 1, "IN_OUT": "UP"}]"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.is_catalog_error());
    }

    #[test]
    fn test_empty_array() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.packages().is_empty());
    }
}
