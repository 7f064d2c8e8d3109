//! Generator configuration and state machine description loading.
//!
//! [`load_config`] reads the optional `fsmgen.toml` that tunes the emitters and the
//! lint pass. [`load_description`] reads a JSON or TOML state machine description into
//! the raw [`serde_json::Value`] the normalizer consumes, keeping the key order of the
//! source document.

#![warn(missing_docs)]

pub mod description;
pub mod error;
pub mod loader;
pub mod types;

pub use description::{load_description, load_description_from_str, DescriptionFormat};
pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::{GeneratorConfig, LintConfig, VerilogConfig};
