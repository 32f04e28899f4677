//! Package binding generator.
//!
//! Entry point of the pipeline: takes the catalog rows of one package and a
//! [`GenerationConfig`], and produces one Rust source file.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::PackageGenerator;
//! use pkgmap_core::{ArgumentDescriptor, Direction, GenerationConfig};
//!
//! let rows = vec![
//!     ArgumentDescriptor::new("APP", "ORDERS_PKG", "ADD_ITEM")
//!         .with_name("P_ID")
//!         .at_position(1)
//!         .with_type("NUMBER")
//!         .with_direction(Direction::In),
//! ];
//! let config = GenerationConfig::builder()
//!     .owner("APP")
//!     .package("ORDERS_PKG")
//!     .namespace("db::orders")
//!     .build()
//!     .unwrap();
//!
//! let generator = PackageGenerator::new().unwrap();
//! let code = generator.generate(&rows, &config).unwrap();
//!
//! assert_eq!(code.file_count(), 1);
//! assert_eq!(code.files[0].path, "db/orders/orders_pkg.rs");
//! ```

use crate::assembler::{self, PackageDeclaration};
use crate::common::types::{GeneratedCode, GeneratedFile};
use crate::grouper;
use crate::render;
use crate::template_engine::{PACKAGE_TEMPLATE, TemplateEngine};
use pkgmap_core::{ArgumentDescriptor, Error, GenerationConfig, Result};

/// Generator for package bindings.
///
/// Stateless apart from the registered templates; one instance can serve
/// any number of packages.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct PackageGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl PackageGenerator<'_> {
    /// Creates a new generator.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the built-in template).
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Builds the declaration tree for a package without rendering it.
    ///
    /// `rows` must already be ordered by position, as the catalog collaborator
    /// delivers them.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The configuration is invalid
    /// - `rows` is empty
    /// - A row belongs to another owner or package
    /// - A remote type cannot be mapped to a bind kind, or to a local type
    ///   in strict mode
    pub fn assemble(
        &self,
        rows: &[ArgumentDescriptor],
        config: &GenerationConfig,
    ) -> Result<PackageDeclaration> {
        config.validate()?;
        if rows.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        if let Some(stray) = rows.iter().find(|row| {
            !row.owner.eq_ignore_ascii_case(&config.owner)
                || !row.package_name.eq_ignore_ascii_case(&config.package)
        }) {
            return Err(Error::InvalidCatalog {
                message: format!(
                    "row for '{}' does not belong to package {}.{}",
                    stray.routine_id(),
                    config.owner,
                    config.package
                ),
            });
        }

        let groups = grouper::group_overloads(rows)?;
        assembler::assemble(&groups, config)
    }

    /// Renders an assembled declaration into its source file.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render(&self, declaration: &PackageDeclaration) -> Result<GeneratedFile> {
        let context = render::package_context(declaration);
        let content = self.engine.render(PACKAGE_TEMPLATE, &context)?;
        Ok(GeneratedFile {
            path: declaration.file_path(),
            content,
        })
    }

    /// Generates the bindings of one package.
    ///
    /// # Errors
    ///
    /// Returns error if assembly or rendering fails; see
    /// [`assemble`](Self::assemble).
    pub fn generate(
        &self,
        rows: &[ArgumentDescriptor],
        config: &GenerationConfig,
    ) -> Result<GeneratedCode> {
        tracing::info!(
            "Generating bindings for package {}.{} into {}",
            config.owner,
            config.package,
            config.namespace
        );

        let declaration = self.assemble(rows, config)?;
        let file = self.render(&declaration)?;

        let mut code = GeneratedCode::new();
        code.add_file(file);

        tracing::info!(
            "Successfully generated {} callables ({} unsupported) for {}",
            declaration.callables.len(),
            declaration.unsupported_count(),
            config.package
        );

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgmap_core::Direction;

    fn config() -> GenerationConfig {
        GenerationConfig::builder()
            .owner("APP")
            .package("ORDERS_PKG")
            .namespace("db")
            .build()
            .unwrap()
    }

    fn row(routine: &str, name: &str) -> ArgumentDescriptor {
        ArgumentDescriptor::new("APP", "ORDERS_PKG", routine)
            .with_name(name)
            .at_position(1)
            .with_type("NUMBER")
            .with_direction(Direction::In)
    }

    #[test]
    fn test_generator_creation() {
        assert!(PackageGenerator::new().is_ok());
    }

    #[test]
    fn test_empty_rows_rejected() {
        let generator = PackageGenerator::new().unwrap();
        let err = generator.generate(&[], &config()).unwrap_err();
        assert!(err.is_empty_catalog());
    }

    #[test]
    fn test_foreign_rows_rejected() {
        let generator = PackageGenerator::new().unwrap();
        let rows = [
            row("ADD_ITEM", "P_ID"),
            ArgumentDescriptor::new("APP", "OTHER_PKG", "X").with_name("P_X"),
        ];
        let err = generator.generate(&rows, &config()).unwrap_err();
        assert!(err.is_catalog_error());
        assert!(err.to_string().contains("APP.OTHER_PKG.X"));
    }

    #[test]
    fn test_owner_match_is_case_insensitive() {
        let generator = PackageGenerator::new().unwrap();
        let rows = [ArgumentDescriptor::new("app", "orders_pkg", "PING")];
        assert!(generator.generate(&rows, &config()).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let generator = PackageGenerator::new().unwrap();
        let mut config = config();
        config.emit_sync = false;
        let err = generator.generate(&[row("A", "P_A")], &config).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_render_uses_declaration_path() {
        let generator = PackageGenerator::new().unwrap();
        let decl = generator.assemble(&[row("ADD_ITEM", "P_ID")], &config()).unwrap();
        let file = generator.render(&decl).unwrap();
        assert_eq!(file.path, "db/orders_pkg.rs");
        assert!(file.content.contains("pub fn add_item("));
    }
}
