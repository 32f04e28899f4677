//! Wire-level bind kinds.

use crate::CallError;
use std::fmt;
use std::str::FromStr;

/// Wire type used when binding a parameter.
///
/// Parsing is lenient about case, spaces, underscores and slashes, so remote
/// type names such as `BINARY_DOUBLE` or `NCHAR` resolve directly.
///
/// # Examples
///
/// ```
/// use pkgmap_runtime::BindKind;
///
/// assert_eq!("BLOB".parse::<BindKind>().unwrap(), BindKind::Blob);
/// assert_eq!("binary_double".parse::<BindKind>().unwrap(), BindKind::BinaryDouble);
/// assert!("INTERVAL DAY TO SECOND".parse::<BindKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindKind {
    /// Arbitrary-precision number
    Decimal,
    /// 16-bit integer
    Int16,
    /// 32-bit integer
    Int32,
    /// 64-bit integer
    Int64,
    /// Single-precision float
    Single,
    /// Double-precision float
    Double,
    /// Native single-precision float
    BinaryFloat,
    /// Native double-precision float
    BinaryDouble,
    /// Variable-length character data
    Varchar2,
    /// Variable-length national character data
    NVarchar2,
    /// Fixed-length character data
    Char,
    /// Fixed-length national character data
    NChar,
    /// Legacy long value
    Long,
    /// Legacy long binary value
    LongRaw,
    /// Character large object
    Clob,
    /// National character large object
    NClob,
    /// Binary large object
    Blob,
    /// External binary file
    BFile,
    /// Raw binary data
    Raw,
    /// Date and time
    Date,
    /// Timestamp
    TimeStamp,
    /// Timestamp with time zone
    TimeStampTZ,
    /// Timestamp with local time zone
    TimeStampLTZ,
    /// Boolean
    Boolean,
    /// Cursor handle
    RefCursor,
    /// Record or object value
    Object,
    /// XML document
    XmlType,
    /// JSON document
    Json,
}

impl BindKind {
    /// All bind kinds, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Decimal,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Single,
        Self::Double,
        Self::BinaryFloat,
        Self::BinaryDouble,
        Self::Varchar2,
        Self::NVarchar2,
        Self::Char,
        Self::NChar,
        Self::Long,
        Self::LongRaw,
        Self::Clob,
        Self::NClob,
        Self::Blob,
        Self::BFile,
        Self::Raw,
        Self::Date,
        Self::TimeStamp,
        Self::TimeStampTZ,
        Self::TimeStampLTZ,
        Self::Boolean,
        Self::RefCursor,
        Self::Object,
        Self::XmlType,
        Self::Json,
    ];

    /// Returns the token used in generated code (`BindKind::<token>`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::BinaryFloat => "BinaryFloat",
            Self::BinaryDouble => "BinaryDouble",
            Self::Varchar2 => "Varchar2",
            Self::NVarchar2 => "NVarchar2",
            Self::Char => "Char",
            Self::NChar => "NChar",
            Self::Long => "Long",
            Self::LongRaw => "LongRaw",
            Self::Clob => "Clob",
            Self::NClob => "NClob",
            Self::Blob => "Blob",
            Self::BFile => "BFile",
            Self::Raw => "Raw",
            Self::Date => "Date",
            Self::TimeStamp => "TimeStamp",
            Self::TimeStampTZ => "TimeStampTZ",
            Self::TimeStampLTZ => "TimeStampLTZ",
            Self::Boolean => "Boolean",
            Self::RefCursor => "RefCursor",
            Self::Object => "Object",
            Self::XmlType => "XmlType",
            Self::Json => "Json",
        }
    }
}

impl fmt::Display for BindKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindKind {
    type Err = CallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.as_str()) == wanted)
            .ok_or_else(|| CallError::UnknownBindKind {
                token: s.to_string(),
            })
    }
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '/'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_roundtrip() {
        for kind in BindKind::ALL {
            assert_eq!(kind.as_str().parse::<BindKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_remote_spellings() {
        assert_eq!("NVARCHAR2".parse::<BindKind>().unwrap(), BindKind::NVarchar2);
        assert_eq!("LONG RAW".parse::<BindKind>().unwrap(), BindKind::LongRaw);
        assert_eq!("XMLTYPE".parse::<BindKind>().unwrap(), BindKind::XmlType);
        assert_eq!("timestamp".parse::<BindKind>().unwrap(), BindKind::TimeStamp);
    }

    #[test]
    fn test_unknown_token() {
        let err = "SDO_GEOMETRY".parse::<BindKind>().unwrap_err();
        assert!(err.to_string().contains("SDO_GEOMETRY"));
        assert!("PL/SQL BOOLEAN".parse::<BindKind>().is_err());
    }
}
