//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use std::path::Path;

/// The configuration file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "fsmgen.toml";

/// Loads and validates a generator configuration file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a generator configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        what: "configuration",
        message: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// A rule cannot be both denied and allowed.
fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if let Some(rule) = config
        .lint
        .deny
        .iter()
        .find(|rule| config.lint.allow.contains(rule))
    {
        return Err(ConfigError::ValidationError(format!(
            "lint rule '{rule}' is both denied and allowed"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(!config.verilog.banner);
        assert!(config.lint.deny.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[verilog]
banner = true

[lint]
deny = ["W101"]
allow = "unreachable-state"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert!(config.verilog.banner);
        assert_eq!(config.lint.deny, vec!["W101"]);
        assert_eq!(config.lint.allow, vec!["unreachable-state"]);
    }

    #[test]
    fn conflicting_rule_errors() {
        let toml = r#"
[lint]
deny = ["W102"]
allow = ["W102"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unknown_section_errors() {
        let err = load_config_from_str("[vhdl]\nbanner = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[verilog]\nbanner = true\n").unwrap();
        let config = load_config(&path).unwrap();
        assert!(config.verilog.banner);
    }

    #[test]
    fn missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
