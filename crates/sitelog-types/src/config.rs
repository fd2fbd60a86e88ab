//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::Method;

/// Format string used when none is configured.
pub const DEFAULT_FORMAT: &str =
    "[{date}] {label}   - {name}:{pid} - {filename}:{function}:{line} - {parameters}";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Name shown through the `{name}` token
    #[serde(default = "default_name")]
    pub name: String,

    /// Lowest method that still produces output (`None` logs everything)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<Method>,

    /// Output format with `{token}` placeholders
    #[serde(default = "default_format")]
    pub format: String,

    /// Constant tokens registered on top of the built-ins
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tokens: BTreeMap<String, String>,

    /// Paint the `{label}` token when writing to a terminal
    #[serde(default)]
    pub color: bool,

    /// Whether the augmentation is switched on at construction
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_name() -> String {
    "app".to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            min_level: None,
            format: default_format(),
            tokens: BTreeMap::new(),
            color: false,
            enabled: default_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: ConsoleConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert!(config.enabled);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
name: svc
min_level: warn
format: "{name}:{parameters}"
tokens:
  region: eu-west
color: true
"#;
        let config: ConsoleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "svc");
        assert_eq!(config.min_level, Some(Method::Warn));
        assert_eq!(config.format, "{name}:{parameters}");
        assert_eq!(config.tokens.get("region").map(String::as_str), Some("eu-west"));
        assert!(config.color);
    }
}
