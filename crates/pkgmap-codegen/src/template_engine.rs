//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the package file template
//! pre-registered. Escaping is disabled since the output is Rust source,
//! not HTML.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "fn {{name}}() {}").unwrap();
//! let rendered = engine.render("greeting", &json!({"name": "ping"})).unwrap();
//! assert_eq!(rendered, "fn ping() {}");
//! ```

use handlebars::Handlebars;
use pkgmap_core::{Error, Result};
use serde::Serialize;

/// Name of the built-in package file template.
pub const PACKAGE_TEMPLATE: &str = "package";

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the built-in template).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(
                PACKAGE_TEMPLATE,
                include_str!("../templates/package.rs.hbs"),
            )
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register package template: {e}"),
                source: None,
            })?;

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::SerializationError {
                message: format!("Failed to register template '{name}': {e}"),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn package_context() -> serde_json::Value {
        json!({
            "owner": "APP",
            "package": "ORDERS_PKG",
            "namespace": "db::orders",
            "container": "OrdersPkg",
            "holders": [
                {
                    "name": "GetInfoOut",
                    "routine": "APP.ORDERS_PKG.GET_INFO",
                    "fields": [
                        { "name": "p_name", "remote": "P_NAME", "ty": "Option<String>" }
                    ]
                }
            ],
            "callables": [
                {
                    "name": "ping",
                    "keyword": "fn",
                    "doc": [" Calls `APP.ORDERS_PKG.PING`."],
                    "attributes": [],
                    "params": ["conn: &mut impl Connection"],
                    "return_type": "()",
                    "body": [
                        "let mut call = ProcedureCall::new(\"APP.ORDERS_PKG.PING\");",
                        "conn.execute(&mut call)?;",
                        "Ok(())"
                    ],
                    "routine": "APP.ORDERS_PKG.PING",
                    "overload": null,
                    "variant": "sync",
                    "unsupported": false
                }
            ]
        })
    }

    #[test]
    fn test_template_engine_creation() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_render_package_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(PACKAGE_TEMPLATE, &package_context()).unwrap();

        assert!(rendered.contains("pub struct GetInfoOut {"));
        assert!(rendered.contains("    pub p_name: Option<String>,"));
        assert!(rendered.contains("pub struct OrdersPkg;"));
        assert!(rendered.contains("impl OrdersPkg {"));
        assert!(rendered.contains("    pub fn ping(\n        conn: &mut impl Connection,\n    ) -> Result<(), CallError> {"));
        assert!(rendered.contains("        conn.execute(&mut call)?;"));
    }

    #[test]
    fn test_render_does_not_escape() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(PACKAGE_TEMPLATE, &package_context()).unwrap();
        assert!(rendered.contains("&mut impl Connection"));
        assert!(rendered.contains("Option<String>"));
        assert!(!rendered.contains("&amp;"));
        assert!(!rendered.contains("&lt;"));
    }

    #[test]
    fn test_render_package_without_holders() {
        let engine = TemplateEngine::new().unwrap();
        let mut context = package_context();
        context["holders"] = json!([]);
        let rendered = engine.render(PACKAGE_TEMPLATE, &context).unwrap();
        assert!(!rendered.contains("#[derive(Debug, Clone, Default, PartialEq)]"));
    }

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("nonexistent", &json!({})).unwrap_err();
        assert!(matches!(err, Error::SerializationError { .. }));
    }

    #[test]
    fn test_render_with_missing_required_field() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render(PACKAGE_TEMPLATE, &json!({"package": "ORDERS_PKG"}));
        assert!(result.is_err(), "Should fail with missing required field");
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("invalid", "Hello {{name");
        assert!(matches!(
            result.unwrap_err(),
            Error::SerializationError { .. }
        ));
    }

    #[test]
    fn test_custom_template_override() {
        let mut engine = TemplateEngine::new().unwrap();
        engine.register_template_string("override", "Version 1").unwrap();
        engine.register_template_string("override", "Version 2").unwrap();

        let result = engine.render("override", &json!({})).unwrap();
        assert_eq!(result, "Version 2");
    }

    #[test]
    fn test_strict_mode_fails_on_missing_variable() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("strict", "Value: {{missing_var}}")
            .unwrap();

        let result = engine.render("strict", &json!({"other_var": "value"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrent_template_usage() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
