//! Template contexts for the package file.

use crate::composite::CompositeOutputType;
use crate::signature::Variant;
use serde::Serialize;

/// Context for rendering one package file.
///
/// # Examples
///
/// ```
/// use pkgmap_codegen::render::PackageContext;
///
/// let context = PackageContext {
///     owner: "APP".to_string(),
///     package: "ORDERS_PKG".to_string(),
///     namespace: "db::orders".to_string(),
///     container: "OrdersPkg".to_string(),
///     holders: vec![],
///     callables: vec![],
/// };
///
/// assert_eq!(context.container, "OrdersPkg");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PackageContext {
    /// Owning schema
    pub owner: String,
    /// Remote package name
    pub package: String,
    /// Target module path
    pub namespace: String,
    /// Container type name
    pub container: String,
    /// Output holder declarations
    pub holders: Vec<CompositeOutputType>,
    /// Callables in emission order
    pub callables: Vec<CallableContext>,
}

/// Context for rendering one callable.
#[derive(Debug, Clone, Serialize)]
pub struct CallableContext {
    /// Function name
    pub name: String,
    /// `fn` or `async fn`
    pub keyword: String,
    /// Doc comment lines, without the leading `///`
    pub doc: Vec<String>,
    /// Attributes placed above the function
    pub attributes: Vec<String>,
    /// Parameter declarations, connection first
    pub params: Vec<String>,
    /// Return type inside `Result<_, CallError>`
    pub return_type: String,
    /// Body lines relative to the function body
    pub body: Vec<String>,
    /// Fully qualified routine identifier
    pub routine: String,
    /// Overload id
    pub overload: Option<String>,
    /// Calling convention
    pub variant: Variant,
    /// Body is the not-implemented stub
    pub unsupported: bool,
}
