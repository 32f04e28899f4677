//! Output formatters for CLI commands.
//!
//! Every command report is a serializable struct. `json` prints it as-is,
//! `text` lays it out as indented `key: value` lines, and `pretty` does the
//! same with colors.

use anyhow::Result;
use colored::Colorize;
use pkgmap_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use pkgmap_cli::formatters::format_output;
/// use pkgmap_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Report {
///     package: String,
///     callables: usize,
/// }
///
/// let report = Report { package: "APP.ORDERS_PKG".to_string(), callables: 4 };
///
/// let output = format_output(&report, OutputFormat::Json)?;
/// assert!(output.contains("\"package\""));
///
/// let output = format_output(&report, OutputFormat::Text)?;
/// assert_eq!(output, "package: APP.ORDERS_PKG\ncallables: 4");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => layout(data, false),
        OutputFormat::Pretty => layout(data, true),
    }
}

fn layout<T: Serialize>(data: &T, color: bool) -> Result<String> {
    let value = serde_json::to_value(data)?;
    let mut lines = Vec::new();
    match &value {
        Value::Object(_) | Value::Array(_) => write_block(&value, 0, color, &mut lines),
        scalar => lines.push(scalar_text(scalar, color)),
    }
    Ok(lines.join("\n"))
}

/// Appends the lines of an object or array at `indent`.
fn write_block(value: &Value, indent: usize, color: bool, lines: &mut Vec<String>) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let key = if color {
                    key.blue().bold().to_string()
                } else {
                    key.clone()
                };
                if is_nested(val) {
                    lines.push(format!("{pad}{key}:"));
                    write_block(val, indent + 1, color, lines);
                } else {
                    lines.push(format!("{pad}{key}: {}", inline(val, color)));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if item.is_object() {
                    lines.push(format!("{pad}-"));
                    write_block(item, indent + 1, color, lines);
                } else {
                    lines.push(format!("{pad}- {}", inline(item, color)));
                }
            }
        }
        scalar => lines.push(format!("{pad}{}", scalar_text(scalar, color))),
    }
}

/// Objects and non-empty arrays of objects get their own block.
fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => items.iter().any(Value::is_object),
        _ => false,
    }
}

fn inline(value: &Value, color: bool) -> String {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(|v| inline(v, color)).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(_) => "{}".to_string(),
        scalar => scalar_text(scalar, color),
    }
}

fn scalar_text(value: &Value, color: bool) -> String {
    let plain = match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if !color {
        return plain;
    }
    match value {
        Value::Null => plain.dimmed().to_string(),
        Value::Bool(true) => plain.yellow().to_string(),
        Value::Number(_) => plain.cyan().to_string(),
        Value::String(_) => plain.green().to_string(),
        _ => plain,
    }
}
