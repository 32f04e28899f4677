//! Strong identifier types for pkgmap.
//!
//! Using newtypes instead of raw strings keeps the fully qualified routine
//! identifier and the target module path from being confused with plain
//! remote names.
//!
//! # Examples
//!
//! ```
//! use pkgmap_core::{Namespace, RoutineId};
//!
//! let id = RoutineId::new("APP", "ORDERS_PKG", "ADD_ITEM");
//! assert_eq!(id.to_string(), "APP.ORDERS_PKG.ADD_ITEM");
//!
//! let ns = Namespace::new("billing::orders").unwrap();
//! assert_eq!(ns.segments().count(), 2);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified remote routine identifier (`OWNER.PACKAGE.ROUTINE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutineId {
    owner: String,
    package: String,
    routine: String,
}

impl RoutineId {
    /// Creates a routine identifier.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        package: impl Into<String>,
        routine: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            package: package.into(),
            routine: routine.into(),
        }
    }

    /// Returns the owning schema.
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the package name.
    #[inline]
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the routine name.
    #[inline]
    #[must_use]
    pub fn routine(&self) -> &str {
        &self.routine
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.owner, self.package, self.routine)
    }
}

/// Target module path for generated bindings (`a::b::c`).
///
/// Every segment must be a valid, non-keyword Rust identifier.
///
/// # Examples
///
/// ```
/// use pkgmap_core::Namespace;
///
/// assert!(Namespace::new("db::orders").is_ok());
/// assert!(Namespace::new("db::").is_err());
/// assert!(Namespace::new("9lives").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Creates a validated namespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the path is empty or any segment
    /// is not a plain identifier.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(Error::ValidationError {
                field: "namespace".to_string(),
                reason: "namespace cannot be empty".to_string(),
            });
        }

        for segment in trimmed.split("::") {
            if !is_plain_identifier(segment) {
                return Err(Error::ValidationError {
                    field: "namespace".to_string(),
                    reason: format!("'{segment}' is not a valid module name in '{trimmed}'"),
                });
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the namespace as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the module path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split("::")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

fn is_plain_identifier(segment: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ];

    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && segment != "_"
        && !KEYWORDS.contains(&segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_id_accessors() {
        let id = RoutineId::new("APP", "PKG", "RUN");
        assert_eq!(id.owner(), "APP");
        assert_eq!(id.package(), "PKG");
        assert_eq!(id.routine(), "RUN");
        assert_eq!(format!("{id}"), "APP.PKG.RUN");
    }

    #[test]
    fn test_namespace_validation() {
        assert!(Namespace::new("orders").is_ok());
        assert!(Namespace::new("billing::orders_v2").is_ok());
        assert!(Namespace::new("  db::pkg  ").is_ok());

        assert!(Namespace::new("").is_err());
        assert!(Namespace::new("a::::b").is_err());
        assert!(Namespace::new("billing.orders").is_err());
        assert!(Namespace::new("crate::orders").is_err());
        assert!(Namespace::new("_").is_err());
    }

    #[test]
    fn test_namespace_segments() {
        let ns = Namespace::new("a::b::c").unwrap();
        assert_eq!(ns.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_namespace_serde() {
        let ns: Namespace = serde_json::from_str("\"db::orders\"").unwrap();
        assert_eq!(ns.as_str(), "db::orders");
        assert!(serde_json::from_str::<Namespace>("\"db::\"").is_err());
    }
}
