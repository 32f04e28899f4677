//! Bound parameter values.

use crate::{CallError, Decimal};
use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;

/// Handle to a server-side cursor returned by a routine.
///
/// A default handle is closed; drivers hand out open handles with an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RefCursor {
    id: Option<u64>,
}

impl RefCursor {
    /// Creates an open cursor handle.
    #[must_use]
    pub const fn open(id: u64) -> Self {
        Self { id: Some(id) }
    }

    /// Returns the driver-assigned cursor id, if open.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns `true` if the handle refers to a cursor.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.id.is_some()
    }
}

/// A value exchanged with the remote routine.
///
/// # Examples
///
/// ```
/// use pkgmap_runtime::Value;
///
/// let absent = Value::from(None::<String>);
/// assert!(absent.is_null());
///
/// let text = Value::from(Some("abc".to_string()));
/// assert_eq!(text.to_text().unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Remote NULL
    #[default]
    Null,
    /// Exact number
    Number(Decimal),
    /// Integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Character data
    Text(String),
    /// Single character
    Char(char),
    /// Date and time
    DateTime(NaiveDateTime),
    /// Boolean
    Boolean(bool),
    /// Cursor handle
    Cursor(RefCursor),
    /// Record or object attributes, in declaration order
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns `true` for remote NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the name of the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Char(_) => "char",
            Self::DateTime(_) => "datetime",
            Self::Boolean(_) => "boolean",
            Self::Cursor(_) => "cursor",
            Self::Object(_) => "object",
        }
    }

    const fn mismatch(&self, expected: &'static str) -> CallError {
        CallError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Reads the value as an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-numeric values and
    /// [`CallError::InvalidNumber`] for malformed numeric text and numbers
    /// outside the 28-digit decimal range.
    pub fn to_decimal(&self) -> Result<Decimal, CallError> {
        match self {
            Self::Number(d) => Ok(*d),
            Self::Integer(i) => Ok(Decimal::from(*i)),
            Self::Float(f) => Decimal::try_from(*f).map_err(|_| CallError::InvalidNumber {
                text: f.to_string(),
            }),
            Self::Text(s) => s.trim().parse().map_err(|_| CallError::InvalidNumber {
                text: s.clone(),
            }),
            other => Err(other.mismatch("number")),
        }
    }

    /// Reads the value as a 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns an error for non-integral or out-of-range values.
    pub fn to_i64(&self) -> Result<i64, CallError> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Number(d) => d
                .fract()
                .is_zero()
                .then(|| d.to_i64())
                .flatten()
                .ok_or_else(|| CallError::InvalidNumber {
                    text: d.to_string(),
                }),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Reads the value as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns an error for non-integral or out-of-range values.
    pub fn to_i32(&self) -> Result<i32, CallError> {
        let wide = self.to_i64()?;
        i32::try_from(wide).map_err(|_| CallError::InvalidNumber {
            text: wide.to_string(),
        })
    }

    /// Reads the value as a double-precision float.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-numeric values.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Result<f64, CallError> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Integer(i) => Ok(*i as f64),
            Self::Number(d) => d.to_f64().ok_or_else(|| CallError::InvalidNumber {
                text: d.to_string(),
            }),
            other => Err(other.mismatch("float")),
        }
    }

    /// Reads the value as text.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for cursors, objects and NULL.
    pub fn to_text(&self) -> Result<String, CallError> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Char(c) => Ok(c.to_string()),
            Self::Number(d) => Ok(d.to_string()),
            Self::Integer(i) => Ok(i.to_string()),
            other => Err(other.mismatch("text")),
        }
    }

    /// Reads the value as a single character.
    ///
    /// Fixed-length character data is blank-padded by the server, so only the
    /// first character of text is used.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-character values.
    pub fn to_char(&self) -> Result<char, CallError> {
        match self {
            Self::Char(c) => Ok(*c),
            Self::Text(s) => s.chars().next().ok_or_else(|| self.mismatch("char")),
            other => Err(other.mismatch("char")),
        }
    }

    /// Reads the value as a date and time.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-temporal values.
    pub fn to_date_time(&self) -> Result<NaiveDateTime, CallError> {
        match self {
            Self::DateTime(dt) => Ok(*dt),
            other => Err(other.mismatch("datetime")),
        }
    }

    /// Reads the value as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-boolean values.
    pub fn to_bool(&self) -> Result<bool, CallError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(i) => Ok(*i != 0),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Reads the value as a cursor handle.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::TypeMismatch`] for non-cursor values.
    pub fn to_cursor(&self) -> Result<RefCursor, CallError> {
        match self {
            Self::Cursor(c) => Ok(c.clone()),
            other => Err(other.mismatch("cursor")),
        }
    }

    /// Returns the value unchanged, for record-shaped results.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other conversions.
    pub fn to_object(&self) -> Result<Self, CallError> {
        Ok(self.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<RefCursor> for Value {
    fn from(value: RefCursor) -> Self {
        Self::Cursor(value)
    }
}
