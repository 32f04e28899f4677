//! Raw catalog rows.

use pkgmap_core::{ArgumentDescriptor, Direction, Error, Result};
use serde::{Deserialize, Serialize};

/// One row of the routine-argument metadata view, as exported.
///
/// Keys follow the view's column names.
///
/// # Examples
///
/// ```
/// use pkgmap_catalog::ArgumentRow;
/// use pkgmap_core::ArgumentDescriptor;
///
/// let row: ArgumentRow = serde_json::from_str(r#"{
///     "OWNER": "APP", "OBJECT_NAME": "ADD_ITEM", "PACKAGE_NAME": "ORDERS_PKG",
///     "ARGUMENT_NAME": "P_ID", "POSITION": 1, "DATA_TYPE": "NUMBER",
///     "DEFAULTED": "N", "IN_OUT": "IN"
/// }"#).unwrap();
///
/// let arg = ArgumentDescriptor::try_from(row).unwrap();
/// assert_eq!(arg.data_level, 0);
/// assert!(!arg.defaulted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ArgumentRow {
    /// Schema that owns the package
    pub owner: String,
    /// Routine name
    pub object_name: String,
    /// Package name
    pub package_name: String,
    /// Overload id
    #[serde(default)]
    pub overload: Option<String>,
    /// Argument name, null for the function result
    #[serde(default)]
    pub argument_name: Option<String>,
    /// Position within the routine
    pub position: u32,
    /// Nesting level
    #[serde(default)]
    pub data_level: u32,
    /// Declared remote type
    #[serde(default)]
    pub data_type: Option<String>,
    /// `Y` when the argument has a default value
    #[serde(default)]
    pub defaulted: Option<String>,
    /// `IN`, `OUT` or `IN/OUT`
    pub in_out: String,
    /// Declared length
    #[serde(default)]
    pub data_length: Option<u32>,
    /// Declared precision
    #[serde(default)]
    pub data_precision: Option<u32>,
}

impl TryFrom<ArgumentRow> for ArgumentDescriptor {
    type Error = Error;

    fn try_from(row: ArgumentRow) -> Result<Self> {
        let direction: Direction = row.in_out.parse()?;

        let defaulted = match row.defaulted.as_deref().map(str::trim) {
            None | Some("" | "N" | "n") => false,
            Some("Y" | "y") => true,
            Some(other) => {
                return Err(Error::InvalidCatalog {
                    message: format!(
                        "DEFAULTED of {}.{} must be Y or N, found '{other}'",
                        row.object_name,
                        row.argument_name.as_deref().unwrap_or("<return>")
                    ),
                });
            }
        };

        Ok(Self {
            owner: row.owner,
            routine_name: row.object_name,
            package_name: row.package_name,
            overload: row.overload.filter(|id| !id.trim().is_empty()),
            argument_name: row.argument_name.filter(|name| !name.is_empty()),
            position: row.position,
            data_level: row.data_level,
            data_type: row.data_type,
            defaulted,
            direction,
            data_length: row.data_length,
            data_precision: row.data_precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ArgumentRow {
        ArgumentRow {
            owner: "APP".to_string(),
            object_name: "SET_FLAG".to_string(),
            package_name: "ORDERS_PKG".to_string(),
            overload: Some("1".to_string()),
            argument_name: Some("P_FLAG".to_string()),
            position: 2,
            data_level: 0,
            data_type: Some("PL/SQL BOOLEAN".to_string()),
            defaulted: Some("Y".to_string()),
            in_out: "IN".to_string(),
            data_length: None,
            data_precision: None,
        }
    }

    #[test]
    fn test_defaulted_flag() {
        let arg = ArgumentDescriptor::try_from(row()).unwrap();
        assert!(arg.defaulted);
        assert_eq!(arg.name(), Some("P_FLAG"));
        assert_eq!(arg.overload.as_deref(), Some("1"));
    }

    #[test]
    fn test_invalid_defaulted_flag() {
        let mut bad = row();
        bad.defaulted = Some("MAYBE".to_string());
        let err = ArgumentDescriptor::try_from(bad).unwrap_err();
        assert!(err.is_catalog_error());
        assert!(err.to_string().contains("SET_FLAG.P_FLAG"));
    }

    #[test]
    fn test_in_out_token() {
        let mut r = row();
        r.in_out = "IN/OUT".to_string();
        assert_eq!(ArgumentDescriptor::try_from(r).unwrap().direction, Direction::InOut);

        let mut r = row();
        r.in_out = "BOTH".to_string();
        assert!(ArgumentDescriptor::try_from(r).is_err());
    }

    #[test]
    fn test_blank_overload_and_name_dropped() {
        let mut r = row();
        r.overload = Some(" ".to_string());
        r.argument_name = Some(String::new());
        r.in_out = "OUT".to_string();
        let arg = ArgumentDescriptor::try_from(r).unwrap();
        assert_eq!(arg.overload, None);
        assert!(arg.is_return_slot());
    }

    #[test]
    fn test_missing_optional_columns() {
        let r: ArgumentRow = serde_json::from_str(
            r#"{"OWNER": "APP", "OBJECT_NAME": "PING", "PACKAGE_NAME": "PKG",
                "POSITION": 1, "IN_OUT": "IN"}"#,
        )
        .unwrap();
        assert_eq!(r.data_level, 0);
        let arg = ArgumentDescriptor::try_from(r).unwrap();
        assert!(arg.is_placeholder());
        assert!(!arg.defaulted);
    }
}
