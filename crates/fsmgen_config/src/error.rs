//! Error types for configuration and description loading.

/// Errors that can occur when loading `fsmgen.toml` or a state machine description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading a file.
    #[error("failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file content could not be parsed.
    #[error("failed to parse {what}: {message}")]
    ParseError {
        /// What was being parsed, e.g. `configuration` or `description`.
        what: &'static str,
        /// The parser's message.
        message: String,
    },

    /// The description file extension is not one of the supported formats.
    #[error("unsupported description format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
