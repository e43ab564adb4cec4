//! Declarative rule definitions loaded from YAML, JSON or TOML files.
//!
//! # Architecture
//!
//! ```text
//! rule file text
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ validate + compile globs/regexes
//! RuleDefinition (pure domain model)
//!   ↓ collect, reject duplicate ids
//! RuleSet
//! ```

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use tracing::debug;

pub mod dto;
pub mod loader;
pub mod model;

pub use model::{
    CaseKind, DetectConfig, Fixtures, GlobPattern, ImportSpec, ModelError, NamedPattern,
    RegexFlags, RegexPattern, RuleDefinition, RuleId, RuleSet, Scope, TestCase,
};

/// On-disk format of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// YAML document holding one rule or a list of rules.
    Yaml,
    /// JSON document holding one rule or an array of rules.
    Json,
    /// TOML document holding one rule or a `[[rules]]` array.
    Toml,
}

impl RuleFormat {
    /// Picks the format from the file extension; anything unknown is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Errors from reading, parsing and validating a rule file.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum RuleFileError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(archrule::rule_file::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid YAML/JSON/TOML or has the wrong shape.
    #[error("failed to parse {name}: {message}")]
    #[diagnostic(code(archrule::rule_file::parse))]
    Parse {
        /// Rule file name.
        name: String,
        /// Parser message.
        message: String,
        /// The file text, for snippet rendering.
        #[source_code]
        src: NamedSource<String>,
        /// Where the parser stopped, if known.
        #[label("here")]
        span: Option<SourceSpan>,
    },

    /// A rule failed validation (bad regex, glob, flag, severity...).
    #[error("invalid rule in {name}")]
    #[diagnostic(code(archrule::rule_file::invalid))]
    Invalid {
        /// Rule file name.
        name: String,
        /// The validation error.
        source: loader::LoadError,
    },

    /// A rule id is already defined.
    #[error("rule id clash in {name}")]
    #[diagnostic(code(archrule::rule_file::duplicate))]
    Duplicate {
        /// Rule file name.
        name: String,
        /// The duplicate-id error.
        source: ModelError,
    },
}

impl RuleFileError {
    /// One-line cause without the file name, for report lines.
    #[must_use]
    pub fn cause(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Parse { message, .. } => message.clone(),
            Self::Invalid { source, .. } => source.to_string(),
            Self::Duplicate { source, .. } => source.to_string(),
        }
    }
}

struct ParseFailure {
    message: String,
    offset: Option<usize>,
}

impl From<serde_yaml::Error> for ParseFailure {
    fn from(e: serde_yaml::Error) -> Self {
        Self {
            offset: e.location().map(|l| l.index()),
            message: e.to_string(),
        }
    }
}

impl From<toml::de::Error> for ParseFailure {
    fn from(e: toml::de::Error) -> Self {
        Self {
            offset: e.span().map(|s| s.start),
            message: e.message().to_string(),
        }
    }
}

impl ParseFailure {
    fn json(e: &serde_json::Error, content: &str) -> Self {
        Self {
            offset: offset_of(content, e.line(), e.column()),
            message: e.to_string(),
        }
    }
}

/// Converts a 1-based line/column pair to a byte offset.
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(content.len()))
}

fn parse_dtos(
    content: &str,
    format: RuleFormat,
) -> Result<Vec<dto::RuleDefinitionDto>, ParseFailure> {
    match format {
        RuleFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            if value.is_sequence() {
                Ok(serde_yaml::from_str(content)?)
            } else {
                Ok(vec![serde_yaml::from_str(content)?])
            }
        }
        RuleFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).map_err(|e| ParseFailure::json(&e, content))?;
            if value.is_array() {
                serde_json::from_str(content).map_err(|e| ParseFailure::json(&e, content))
            } else {
                serde_json::from_str(content)
                    .map(|d| vec![d])
                    .map_err(|e| ParseFailure::json(&e, content))
            }
        }
        RuleFormat::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            if table.get("rules").is_some_and(toml::Value::is_array) {
                let wrapped: dto::TomlRulesDto = toml::from_str(content)?;
                Ok(wrapped.rules)
            } else {
                Ok(vec![toml::from_str(content)?])
            }
        }
    }
}

/// Parses and validates the rules of one rule document.
///
/// `name` is used in error messages only.
///
/// # Errors
///
/// Returns an error if the document does not parse, a rule fails
/// validation, or two rules in the document share an id.
pub fn parse_rules(
    name: &str,
    content: &str,
    format: RuleFormat,
) -> Result<Vec<RuleDefinition>, RuleFileError> {
    let dtos = parse_dtos(content, format).map_err(|failure| RuleFileError::Parse {
        name: name.to_string(),
        message: failure.message,
        src: NamedSource::new(name, content.to_string()),
        span: failure.offset.map(|o| SourceSpan::from((o, 0))),
    })?;

    let mut rules = RuleSet::default();
    for dto in dtos {
        let rule = loader::load(dto).map_err(|source| RuleFileError::Invalid {
            name: name.to_string(),
            source,
        })?;
        rules.insert(rule).map_err(|source| RuleFileError::Duplicate {
            name: name.to_string(),
            source,
        })?;
    }

    debug!("Loaded {} rule(s) from {}", rules.len(), name);
    Ok(rules.into_rules())
}

/// Reads and parses a rule file, picking the format from its extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_rules`] fails.
pub fn load_rule_file(path: &Path) -> Result<Vec<RuleDefinition>, RuleFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| RuleFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(
        &path.display().to_string(),
        &content,
        RuleFormat::from_path(path),
    )
}

/// Loads several rule files into one rule set.
///
/// # Errors
///
/// Returns the first file error, or a duplicate-id error naming the file
/// that redefines an id.
pub fn load_rule_set<P: AsRef<Path>>(paths: &[P]) -> Result<RuleSet, RuleFileError> {
    let mut set = RuleSet::default();
    for path in paths {
        let path = path.as_ref();
        for rule in load_rule_file(path)? {
            set.insert(rule).map_err(|source| RuleFileError::Duplicate {
                name: path.display().to_string(),
                source,
            })?;
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(RuleFormat::from_path(Path::new("a.rule.yaml")), RuleFormat::Yaml);
        assert_eq!(RuleFormat::from_path(Path::new("a.yml")), RuleFormat::Yaml);
        assert_eq!(RuleFormat::from_path(Path::new("rules_map.json")), RuleFormat::Json);
        assert_eq!(RuleFormat::from_path(Path::new("rules.toml")), RuleFormat::Toml);
    }

    #[test]
    fn yaml_single_and_list() {
        let one = parse_rules("one.yaml", "id: A\n", RuleFormat::Yaml).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_rules("many.yaml", "- id: A\n- id: B\n", RuleFormat::Yaml).unwrap();
        let ids: Vec<&str> = many.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn json_single_and_array() {
        let one =
            parse_rules("one.json", r#"{"id": "A", "title": "t"}"#, RuleFormat::Json).unwrap();
        assert_eq!(one[0].title(), "t");

        let many = parse_rules(
            "rules_map.json",
            r#"[{"id": "A"}, {"id": "B", "detect": {"disallowed_calls": ["x("]}}]"#,
            RuleFormat::Json,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].detect().disallowed_calls, vec!["x(".to_string()]);
    }

    #[test]
    fn toml_single_and_rules_array() {
        let one = parse_rules("one.toml", "id = \"A\"\n", RuleFormat::Toml).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_rules(
            "many.toml",
            "[[rules]]\nid = \"A\"\n\n[[rules]]\nid = \"B\"\n",
            RuleFormat::Toml,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn parse_error_carries_span() {
        let err = parse_rules("bad.yaml", "id: [unclosed\n", RuleFormat::Yaml).unwrap_err();
        match err {
            RuleFileError::Parse { name, span, .. } => {
                assert_eq!(name, "bad.yaml");
                assert!(span.is_some());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn json_parse_error_offset() {
        let content = "{\n  \"id\": \"A\",\n}";
        let err = parse_rules("bad.json", content, RuleFormat::Json).unwrap_err();
        assert!(matches!(err, RuleFileError::Parse { span: Some(_), .. }));
    }

    #[test]
    fn missing_id_is_parse_error() {
        let err = parse_rules("no-id.yaml", "title: nothing\n", RuleFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn invalid_rule_names_file() {
        let err = parse_rules(
            "broken.rule.yaml",
            "id: A\ndetect:\n  patterns:\n    - id: p\n      regex: \"(\"\n",
            RuleFormat::Yaml,
        )
        .unwrap_err();
        assert!(matches!(err, RuleFileError::Invalid { .. }));
        assert!(err.to_string().starts_with("invalid rule in broken.rule.yaml"));
    }

    #[test]
    fn invalid_rule_reason_appears_once_in_chain() {
        use std::error::Error as _;

        let err = parse_rules(
            "broken.rule.yaml",
            "id: A\ndetect:\n  patterns:\n    - id: p\n      regex: \"(\"\n",
            RuleFormat::Yaml,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "invalid rule in broken.rule.yaml");
        let source = err.source().unwrap();
        assert!(source
            .to_string()
            .starts_with("A.detect.patterns[0].regex: invalid regex `(`"));
        assert!(source.source().is_none());
        assert_eq!(err.cause(), source.to_string());
    }

    #[test]
    fn duplicate_ids_in_one_file() {
        let err = parse_rules("dup.yaml", "- id: A\n- id: A\n", RuleFormat::Yaml).unwrap_err();
        assert!(matches!(err, RuleFileError::Duplicate { .. }));
    }

    #[test]
    fn offset_of_counts_lines() {
        let content = "ab\ncd\nef";
        assert_eq!(offset_of(content, 1, 1), Some(0));
        assert_eq!(offset_of(content, 2, 2), Some(4));
        assert_eq!(offset_of(content, 3, 1), Some(6));
        assert_eq!(offset_of(content, 0, 0), None);
    }

    #[test]
    fn load_rule_set_rejects_ids_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.rule.yaml");
        let b = dir.path().join("b.rule.yaml");
        std::fs::write(&a, "id: SAME\n").unwrap();
        std::fs::write(&b, "id: SAME\n").unwrap();

        let err = load_rule_set(&[&a, &b]).unwrap_err();
        match err {
            RuleFileError::Duplicate { name, .. } => assert!(name.ends_with("b.rule.yaml")),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn load_rule_file_missing_is_io_error() {
        let err = load_rule_file(Path::new("/nonexistent/x.rule.yaml")).unwrap_err();
        assert!(matches!(err, RuleFileError::Io { .. }));
    }
}
