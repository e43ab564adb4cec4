//! Rule-file deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization and mirror the
//! on-disk rule format one to one. Lists are `Option` so that an explicit
//! `null` and an absent key both mean "empty". They are converted to
//! domain model types via the loader.

use serde::Deserialize;

/// Raw representation of one rule definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinitionDto {
    /// Unique rule id (e.g., "ARCH-DS-NO-DIRECT-ACCESS").
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Applicability scope.
    #[serde(default)]
    pub scope: Option<ScopeDto>,
    /// Detection configuration.
    #[serde(default)]
    pub detect: Option<DetectDto>,
    /// Embedded fixtures.
    #[serde(default)]
    pub tests: Option<TestsDto>,
    /// Severity for scan violations (default: "error").
    #[serde(default)]
    pub severity: Option<String>,
    /// Advice printed with scan violations.
    #[serde(default)]
    pub message: Option<String>,
    /// Document reference.
    #[serde(default)]
    pub doc: Option<String>,
}

/// Raw `scope` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeDto {
    /// Globs of paths the rule applies to (absent: every path).
    #[serde(default)]
    pub include_paths: Option<Vec<String>>,
    /// Globs of paths the rule never applies to.
    #[serde(default)]
    pub exclude_paths: Option<Vec<String>>,
}

/// Raw `detect` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectDto {
    /// Modules whose import flags the file.
    #[serde(default)]
    pub disallowed_imports: Option<Vec<String>>,
    /// Modules exempted from `disallowed_imports`.
    #[serde(default)]
    pub allowlist_imports: Option<Vec<String>>,
    /// Literal substrings that flag the file.
    #[serde(default)]
    pub disallowed_calls: Option<Vec<String>>,
    /// Named detection regexes.
    #[serde(default)]
    pub patterns: Option<Vec<PatternDto>>,
    /// Regexes whose presence suppresses any flag.
    #[serde(default)]
    pub allowlist_patterns: Option<Vec<String>>,
    /// Globs of paths that are never flagged.
    #[serde(default)]
    pub allowlist_paths: Option<Vec<String>>,
    /// Regexes that must all match before detection runs.
    #[serde(default)]
    pub require_patterns: Option<Vec<String>>,
    /// Regexes selecting lines hidden from detection.
    #[serde(default)]
    pub ignore_line_patterns: Option<Vec<String>>,
}

/// Raw named pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDto {
    /// Pattern id reported on match.
    pub id: String,
    /// Regex source.
    pub regex: String,
    /// Flag characters (`s`, `i`, `m`).
    #[serde(default)]
    pub flags: Option<String>,
}

/// Raw `tests` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestsDto {
    /// Cases the rule must flag.
    #[serde(default)]
    pub should_flag: Option<Vec<TestCaseDto>>,
    /// Cases the rule must pass.
    #[serde(default)]
    pub should_pass: Option<Vec<TestCaseDto>>,
}

/// Raw fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCaseDto {
    /// Fixture path.
    pub path: String,
    /// Fixture content.
    #[serde(default)]
    pub content: String,
}

/// TOML rule files wrap several rules in `[[rules]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlRulesDto {
    /// The rules of the file.
    pub rules: Vec<RuleDefinitionDto>,
}
