//! Loading raw state machine descriptions from JSON or TOML files.

use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;

/// A supported on-disk description format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptionFormat {
    /// A JSON document.
    Json,
    /// A TOML document.
    Toml,
}

impl DescriptionFormat {
    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(DescriptionFormat::Json),
            "toml" => Ok(DescriptionFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }
}

/// Reads a description file into its raw value, choosing the parser by extension.
pub fn load_description(path: &Path) -> Result<Value, ConfigError> {
    let format = DescriptionFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    load_description_from_str(&content, format)
}

/// Parses description text into its raw value.
///
/// Object key order follows the source document in both formats.
pub fn load_description_from_str(
    content: &str,
    format: DescriptionFormat,
) -> Result<Value, ConfigError> {
    let parse_error = |message: String| ConfigError::ParseError {
        what: "description",
        message,
    };
    match format {
        DescriptionFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        DescriptionFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(table).map_err(|e| parse_error(e.to_string()))
        }
    }
}
