//! Remote type mapping.
//!
//! One data-driven table keyed by remote type name. Each entry carries the
//! local type, its nullable form, the bind kind, the conversion used when
//! reading a returned value, and whether the type is a composite that cannot
//! be bound directly.
//!
//! Lookups that miss the table are handled per concern:
//!
//! - the bind kind falls back to parsing the remote name as a [`BindKind`]
//!   token, and fails the run if that parse fails;
//! - the local type falls back to an `unmapped!` placeholder (logged), or
//!   fails the run in strict mode.
//!
//! # Examples
//!
//! ```
//! use pkgmap_codegen::type_map::lookup;
//! use pkgmap_runtime::BindKind;
//!
//! let number = lookup("NUMBER").unwrap();
//! assert_eq!(number.nullable, "Option<Decimal>");
//! assert_eq!(number.bind_kind, BindKind::Decimal);
//!
//! assert!(lookup("PL/SQL RECORD").unwrap().composite);
//! assert!(lookup("BLOB").is_none());
//! ```

use pkgmap_core::{ArgumentDescriptor, Error, Result};
use pkgmap_runtime::BindKind;
use serde::Serialize;

/// Table entry for one remote type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Local value type
    pub local: &'static str,
    /// Local type able to represent remote NULL
    pub nullable: &'static str,
    /// Wire type used when binding
    pub bind_kind: BindKind,
    /// `Value` method converting a returned value to `local`
    pub cast: &'static str,
    /// Record-shaped type that cannot be bound directly
    pub composite: bool,
}

impl TypeMapping {
    /// Returns `true` if `nullable` wraps `local` in an `Option`.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable != self.local
    }
}

const fn entry(
    local: &'static str,
    nullable: &'static str,
    bind_kind: BindKind,
    cast: &'static str,
) -> TypeMapping {
    TypeMapping {
        local,
        nullable,
        bind_kind,
        cast,
        composite: false,
    }
}

const DECIMAL: TypeMapping = entry("Decimal", "Option<Decimal>", BindKind::Decimal, "to_decimal");
const TEXT: TypeMapping = entry("String", "Option<String>", BindKind::Varchar2, "to_text");
const DATE_TIME: TypeMapping = entry(
    "NaiveDateTime",
    "Option<NaiveDateTime>",
    BindKind::Date,
    "to_date_time",
);
const OBJECT: TypeMapping = TypeMapping {
    local: "Value",
    nullable: "Value",
    bind_kind: BindKind::Object,
    cast: "to_object",
    composite: true,
};

static TABLE: &[(&str, TypeMapping)] = &[
    ("NUMBER", DECIMAL),
    ("ROWID", DECIMAL),
    ("FLOAT", DECIMAL),
    ("LONG", entry("i64", "Option<i64>", BindKind::Long, "to_i64")),
    ("BINARY_INTEGER", entry("i32", "Option<i32>", BindKind::Int32, "to_i32")),
    ("PLS_INTEGER", entry("i32", "Option<i32>", BindKind::Int32, "to_i32")),
    ("BINARY_DOUBLE", entry("f64", "Option<f64>", BindKind::BinaryDouble, "to_f64")),
    ("VARCHAR2", TEXT),
    ("NVARCHAR2", TypeMapping { bind_kind: BindKind::NVarchar2, ..TEXT }),
    ("CLOB", TypeMapping { bind_kind: BindKind::Clob, ..TEXT }),
    ("CHAR", entry("char", "char", BindKind::Char, "to_char")),
    ("DATE", DATE_TIME),
    ("TIMESTAMP", TypeMapping { bind_kind: BindKind::TimeStamp, ..DATE_TIME }),
    ("PL/SQL BOOLEAN", entry("bool", "Option<bool>", BindKind::Boolean, "to_bool")),
    ("PL/SQL RECORD", OBJECT),
    ("OBJECT", OBJECT),
    ("REF CURSOR", entry("RefCursor", "RefCursor", BindKind::RefCursor, "to_cursor")),
];

/// Looks up a remote type name.
///
/// Matching ignores surrounding whitespace and case.
#[must_use]
pub fn lookup(remote: &str) -> Option<&'static TypeMapping> {
    let remote = remote.trim();
    TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(remote))
        .map(|(_, mapping)| mapping)
}

/// Local type resolved for one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalType {
    /// Declared remote type name
    pub remote: String,
    /// Local value type
    pub local: String,
    /// Local type able to represent remote NULL
    pub nullable: String,
    /// Conversion expression applied to the returned `value`
    pub cast: String,
    /// `true` when the conversion result must be wrapped in `Some`
    pub wrap_some: bool,
    /// `true` when no table entry matched
    pub placeholder: bool,
}

impl LocalType {
    fn from_mapping(remote: &str, mapping: &TypeMapping) -> Self {
        Self {
            remote: remote.to_string(),
            local: mapping.local.to_string(),
            nullable: mapping.nullable.to_string(),
            cast: format!("value.{}()?", mapping.cast),
            wrap_some: mapping.is_nullable(),
            placeholder: false,
        }
    }

    fn placeholder(remote: &str) -> Self {
        let marker = format!("pkgmap_runtime::unmapped!({remote:?})");
        Self {
            remote: remote.to_string(),
            local: marker.clone(),
            nullable: marker.clone(),
            cast: marker,
            wrap_some: false,
            placeholder: true,
        }
    }
}

/// Resolves types for a run, applying the configured unmapped-type policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMapper {
    strict: bool,
}

impl TypeMapper {
    /// Creates a mapper. In strict mode unmapped local types are errors.
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns `true` if unmapped local types fail the run.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns `true` if the argument's type is record-shaped.
    #[must_use]
    pub fn is_composite(&self, arg: &ArgumentDescriptor) -> bool {
        lookup(arg.type_name()).is_some_and(|m| m.composite)
    }

    /// Resolves the wire type of an argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedBindType`] if the type is not in the table and
    /// is not a bind kind token either.
    pub fn bind_kind(&self, arg: &ArgumentDescriptor) -> Result<BindKind> {
        if let Some(mapping) = lookup(arg.type_name()) {
            return Ok(mapping.bind_kind);
        }

        arg.type_name()
            .trim()
            .parse::<BindKind>()
            .map_err(|_| Error::UnmappedBindType {
                routine: arg.routine_id().to_string(),
                argument: arg.name().unwrap_or("<return>").to_string(),
                data_type: arg.type_name().to_string(),
            })
    }

    /// Resolves the local type of an argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnmappedLocalType`] in strict mode when the type is
    /// not in the table.
    pub fn local_type(&self, arg: &ArgumentDescriptor) -> Result<LocalType> {
        self.resolve_local(arg, self.strict)
    }

    /// Resolves the local type of an argument, never failing.
    ///
    /// Used for routines whose body is a stub, where the type only shapes
    /// the signature.
    #[must_use]
    pub fn local_type_lenient(&self, arg: &ArgumentDescriptor) -> LocalType {
        self.resolve_local(arg, false)
            .unwrap_or_else(|_| LocalType::placeholder(arg.type_name()))
    }

    fn resolve_local(&self, arg: &ArgumentDescriptor, strict: bool) -> Result<LocalType> {
        let remote = arg.type_name();
        if let Some(mapping) = lookup(remote) {
            return Ok(LocalType::from_mapping(remote, mapping));
        }

        if strict {
            return Err(Error::UnmappedLocalType {
                routine: arg.routine_id().to_string(),
                data_type: remote.to_string(),
            });
        }

        tracing::warn!(
            routine = %arg.routine_id(),
            argument = arg.name().unwrap_or("<return>"),
            data_type = remote,
            "remote type has no local mapping, emitting placeholder"
        );
        Ok(LocalType::placeholder(remote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgmap_core::Direction;

    fn arg(data_type: &str) -> ArgumentDescriptor {
        ArgumentDescriptor::new("APP", "PKG", "F")
            .with_name("P_X")
            .with_type(data_type)
            .with_direction(Direction::In)
    }

    #[test]
    fn test_numeric_family() {
        for remote in ["NUMBER", "ROWID", "FLOAT"] {
            let m = lookup(remote).unwrap();
            assert_eq!(m.local, "Decimal");
            assert!(m.is_nullable());
        }
        assert_eq!(lookup("LONG").unwrap().nullable, "Option<i64>");
        assert_eq!(lookup("pls_integer").unwrap().bind_kind, BindKind::Int32);
    }

    #[test]
    fn test_non_nullable_types() {
        for remote in ["CHAR", "REF CURSOR", "OBJECT"] {
            assert!(!lookup(remote).unwrap().is_nullable(), "{remote}");
        }
    }

    #[test]
    fn test_text_bind_kinds_differ() {
        assert_eq!(lookup("VARCHAR2").unwrap().bind_kind, BindKind::Varchar2);
        assert_eq!(lookup("NVARCHAR2").unwrap().bind_kind, BindKind::NVarchar2);
        assert_eq!(lookup("CLOB").unwrap().bind_kind, BindKind::Clob);
        assert_eq!(lookup("CLOB").unwrap().local, "String");
    }

    #[test]
    fn test_bind_kind_falls_back_to_token() {
        let mapper = TypeMapper::default();
        assert_eq!(mapper.bind_kind(&arg("BLOB")).unwrap(), BindKind::Blob);
        assert_eq!(mapper.bind_kind(&arg("RAW")).unwrap(), BindKind::Raw);
    }

    #[test]
    fn test_unknown_bind_kind_is_fatal() {
        let err = TypeMapper::default()
            .bind_kind(&arg("SDO_GEOMETRY"))
            .unwrap_err();
        assert!(err.is_unmapped_bind_type());
        assert!(err.to_string().contains("no such bind kind"));
        assert!(err.to_string().contains("P_X"));
    }

    #[test]
    fn test_local_type_conversion() {
        let local = TypeMapper::default().local_type(&arg("VARCHAR2")).unwrap();
        assert_eq!(local.nullable, "Option<String>");
        assert_eq!(local.cast, "value.to_text()?");
        assert!(local.wrap_some);

        let ch = TypeMapper::default().local_type(&arg("CHAR")).unwrap();
        assert!(!ch.wrap_some);
    }

    #[test]
    fn test_unmapped_local_placeholder() {
        let local = TypeMapper::new(false).local_type(&arg("BLOB")).unwrap();
        assert!(local.placeholder);
        assert_eq!(local.nullable, "pkgmap_runtime::unmapped!(\"BLOB\")");
        assert_eq!(local.cast, local.nullable);
    }

    #[test]
    fn test_unmapped_local_strict() {
        let mapper = TypeMapper::new(true);
        assert!(mapper.is_strict());
        let err = mapper.local_type(&arg("BLOB")).unwrap_err();
        assert!(err.is_unmapped_local_type());

        let lenient = mapper.local_type_lenient(&arg("BLOB"));
        assert!(lenient.placeholder);
    }

    #[test]
    fn test_composite_detection() {
        let mapper = TypeMapper::default();
        assert!(mapper.is_composite(&arg("PL/SQL RECORD")));
        assert!(!mapper.is_composite(&arg("NUMBER")));
        assert!(!mapper.is_composite(&arg("UNKNOWN")));
    }
}
