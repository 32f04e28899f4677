//! Argument descriptors read from the remote routine catalog.
//!
//! One [`ArgumentDescriptor`] exists per catalog row. Descriptors are
//! immutable inputs: the generator groups, filters and reads them but never
//! reorders or modifies them.
//!
//! # Examples
//!
//! ```
//! use pkgmap_core::{ArgumentDescriptor, Direction};
//!
//! let arg = ArgumentDescriptor::new("APP", "ORDERS_PKG", "ADD_ITEM")
//!     .with_overload("1")
//!     .with_name("P_ID")
//!     .at_position(1)
//!     .with_type("NUMBER")
//!     .with_direction(Direction::In);
//!
//! assert_eq!(arg.name(), Some("P_ID"));
//! assert!(!arg.is_return_slot());
//! ```

use crate::{Error, RoutineId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a routine argument.
///
/// # Examples
///
/// ```
/// use pkgmap_core::Direction;
///
/// let dir: Direction = "IN/OUT".parse().unwrap();
/// assert_eq!(dir, Direction::InOut);
/// assert!(dir.is_output());
/// assert!(dir.is_input());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Read by the remote routine.
    In,
    /// Written by the remote routine.
    Out,
    /// Read and written by the remote routine.
    InOut,
}

impl Direction {
    /// Returns the catalog token for the direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::InOut => "IN_OUT",
        }
    }

    /// Returns `true` for `OUT` and `IN_OUT`.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Out | Self::InOut)
    }

    /// Returns `true` for `IN` and `IN_OUT`.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::In | Self::InOut)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Self::In),
            "OUT" => Ok(Self::Out),
            "IN_OUT" | "IN/OUT" | "INOUT" => Ok(Self::InOut),
            _ => Err(Error::InvalidCatalog {
                message: format!("unknown argument direction '{s}' (expected IN, OUT or IN/OUT)"),
            }),
        }
    }
}

/// A single row of the routine-argument catalog.
///
/// Rows describe one argument of one overload of one routine. The anonymous
/// row with direction `OUT` is the function result ("return slot"); rows with
/// `data_level > 0` are attributes of a record-shaped argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Schema that owns the package
    pub owner: String,
    /// Routine (procedure or function) name
    pub routine_name: String,
    /// Package name
    pub package_name: String,
    /// Overload identifier, absent for routines that are not overloaded
    pub overload: Option<String>,
    /// Argument name, absent for the return slot
    pub argument_name: Option<String>,
    /// Position within the routine; defines binding and declaration order
    pub position: u32,
    /// Nesting level; 0 for plain arguments
    pub data_level: u32,
    /// Declared remote type name
    pub data_type: Option<String>,
    /// Whether the argument has a remote default value
    pub defaulted: bool,
    /// Argument direction
    pub direction: Direction,
    /// Declared length
    pub data_length: Option<u32>,
    /// Declared precision
    pub data_precision: Option<u32>,
}

impl ArgumentDescriptor {
    /// Creates a descriptor for a nameless `IN` argument at position 0.
    ///
    /// Use the `with_*` methods to fill in the remaining columns.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        package_name: impl Into<String>,
        routine_name: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            routine_name: routine_name.into(),
            package_name: package_name.into(),
            overload: None,
            argument_name: None,
            position: 0,
            data_level: 0,
            data_type: None,
            defaulted: false,
            direction: Direction::In,
            data_length: None,
            data_precision: None,
        }
    }

    /// Sets the overload identifier.
    #[must_use]
    pub fn with_overload(mut self, overload: impl Into<String>) -> Self {
        self.overload = Some(overload.into());
        self
    }

    /// Sets the argument name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.argument_name = Some(name.into());
        self
    }

    /// Sets the position.
    #[must_use]
    pub const fn at_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    /// Sets the nesting level.
    #[must_use]
    pub const fn at_level(mut self, level: u32) -> Self {
        self.data_level = level;
        self
    }

    /// Sets the declared remote type.
    #[must_use]
    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Sets the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Marks the argument as defaulted.
    #[must_use]
    pub const fn defaulted(mut self) -> Self {
        self.defaulted = true;
        self
    }

    /// Sets the declared length.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.data_length = Some(length);
        self
    }

    /// Sets the declared precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.data_precision = Some(precision);
        self
    }

    /// Returns the argument name, treating an empty name as absent.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.argument_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the declared remote type, or an empty string when absent.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.data_type.as_deref().unwrap_or_default()
    }

    /// Returns `true` if this row is the function result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgmap_core::{ArgumentDescriptor, Direction};
    ///
    /// let ret = ArgumentDescriptor::new("APP", "PKG", "F")
    ///     .with_type("NUMBER")
    ///     .with_direction(Direction::Out);
    /// assert!(ret.is_return_slot());
    /// ```
    #[must_use]
    pub fn is_return_slot(&self) -> bool {
        self.direction == Direction::Out && self.name().is_none()
    }

    /// Returns `true` if this row marks a routine without arguments.
    ///
    /// The metadata view emits one nameless `IN` row for such routines; it
    /// contributes a group but never a parameter.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.direction != Direction::Out && self.name().is_none()
    }

    /// Returns `true` for plain (non-nested) arguments.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.data_level == 0
    }

    /// Returns the fully qualified routine identifier.
    #[must_use]
    pub fn routine_id(&self) -> RoutineId {
        RoutineId::new(&self.owner, &self.package_name, &self.routine_name)
    }
}
