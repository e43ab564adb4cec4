//! Configuration types for archrule (`archrule.toml`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Built-in preset: "recommended", "strict", "minimal" or "none".
    #[serde(default)]
    pub preset: Option<String>,

    /// Lowest severity that makes `check` fail (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Scanner configuration.
    #[serde(default)]
    pub check: CheckConfig,

    /// Per-rule overrides keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules
            .get(rule_id)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_id: &str) -> Option<Severity> {
        self.rules.get(rule_id).and_then(|c| c.severity)
    }

    /// Resolves `fail_on`, defaulting to [`Severity::Error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a known severity.
    pub fn fail_on_severity(&self) -> Result<Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Severity::Error),
            Some(value) => Severity::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                key: "fail_on".to_string(),
                value: value.to_string(),
                expected: "error, warning, info",
            }),
        }
    }
}

/// The `[check]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// File extensions to check, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Globs of extra rule files evaluated alongside the preset.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Glob patterns to exclude from scanning.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files when walking directories.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            rules: Vec::new(),
            exclude: default_exclude(),
            respect_gitignore: true,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["dart".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/build/**".to_string(), "**/.dart_tool/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A value outside its allowed set.
    #[error("Invalid value `{value}` for `{key}`, expected one of: {expected}")]
    InvalidValue {
        /// Config key.
        key: String,
        /// The rejected value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.check.respect_gitignore);
        assert_eq!(config.check.extensions, vec!["dart"]);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "strict"
fail_on = "warning"

[check]
extensions = ["dart", "kt"]
rules = ["rules/*.rule.yaml"]

[rules.ARCH-REPO-STATELESS]
enabled = false

[rules.DART-I18N-NO-HARDCODED-TEXT]
severity = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Warning);
        assert_eq!(config.check.extensions, vec!["dart", "kt"]);
        assert_eq!(config.check.rules, vec!["rules/*.rule.yaml"]);
        // Unset keys of a present section keep their defaults.
        assert_eq!(config.check.exclude, default_exclude());
        assert!(!config.is_rule_enabled("ARCH-REPO-STATELESS"));
        assert!(config.is_rule_enabled("ARCH-DS-NO-DIRECT-ACCESS"));
        assert_eq!(
            config.rule_severity("DART-I18N-NO-HARDCODED-TEXT"),
            Some(Severity::Warning)
        );
        assert_eq!(config.rule_severity("ARCH-REPO-STATELESS"), None);
    }

    #[test]
    fn test_invalid_fail_on() {
        let config = Config::parse("fail_on = \"fatal\"").unwrap();
        assert!(matches!(
            config.fail_on_severity(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::parse("preset = "),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archrule.toml");
        std::fs::write(&path, "preset = \"minimal\"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.preset.as_deref(), Some("minimal"));

        assert!(matches!(
            Config::from_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
