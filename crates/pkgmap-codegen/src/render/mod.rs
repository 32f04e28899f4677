//! Rust source rendering.
//!
//! Converts an assembled [`PackageDeclaration`] into template contexts.
//! Bodies are printed by the [`CallBackend`] of each callable's calling
//! convention; the file layout lives in the Handlebars template.

mod backend;
mod context;

pub use backend::{AsyncBackend, CallBackend, SyncBackend, backend_for};
pub use context::{CallableContext, PackageContext};

use crate::assembler::PackageDeclaration;

/// Builds the template context of a package file.
#[must_use]
pub fn package_context(declaration: &PackageDeclaration) -> PackageContext {
    PackageContext {
        owner: declaration.owner.clone(),
        package: declaration.package.clone(),
        namespace: declaration.namespace.to_string(),
        container: declaration.container.clone(),
        holders: declaration.holders.clone(),
        callables: declaration
            .callables
            .iter()
            .map(|c| backend_for(c.signature.variant).render_callable(&c.signature, &c.body))
            .collect(),
    }
}
