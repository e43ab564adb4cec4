//! Pure domain model for declarative rule definitions.
//!
//! This module contains no serde and no I/O. All invariants are enforced at
//! construction time via validated newtypes: once a [`RuleDefinition`]
//! exists, every glob and regex inside it has already been compiled.

use crate::types::Severity;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

// ────────────────────────────────────────────
// Newtypes with validation
// ────────────────────────────────────────────

/// A validated rule identifier (non-empty, no whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new rule identifier.
    ///
    /// # Errors
    ///
    /// Returns error if the id is empty or contains whitespace.
    pub fn new(id: &str) -> Result<Self, ModelError> {
        if id.is_empty() {
            return Err(ModelError::EmptyRuleId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidRuleId { id: id.to_string() });
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated glob pattern for file path matching.
///
/// The glob is compiled once at construction and reused for all match calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    raw: String,
    compiled: glob::Pattern,
}

impl GlobPattern {
    /// Creates a new glob pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty or has invalid glob syntax.
    pub fn new(pattern: &str) -> Result<Self, ModelError> {
        if pattern.is_empty() {
            return Err(ModelError::EmptyGlobPattern);
        }
        let compiled = glob::Pattern::new(pattern).map_err(|e| ModelError::InvalidGlobPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
        })
    }

    /// Tests whether a relative file path matches this pattern.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        if self.compiled.matches(&path_str) {
            return true;
        }
        // `glob::Pattern` lets `*` cross `/`, but `dir/**` still needs an
        // explicit prefix + boundary check for paths directly below `dir`.
        if let Some(prefix) = self.raw.strip_suffix("/**") {
            let normalized = prefix.trim_end_matches('/');
            if path_str.starts_with(normalized)
                && path_str
                    .as_bytes()
                    .get(normalized.len())
                    .is_some_and(|&b| b == b'/')
            {
                return true;
            }
        }
        false
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Compile options for a detection regex.
///
/// Parsed from a flag string: `s` (dot matches newline), `i`
/// (case-insensitive), `m` (`^`/`$` match at line boundaries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    dot_all: bool,
    ignore_case: bool,
    multi_line: bool,
}

impl RegexFlags {
    /// Parses a flag string such as `"si"`.
    ///
    /// # Errors
    ///
    /// Returns error on any character other than `s`, `i`, `m`.
    pub fn parse(flags: &str) -> Result<Self, ModelError> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            match flag {
                's' => parsed.dot_all = true,
                'i' => parsed.ignore_case = true,
                'm' => parsed.multi_line = true,
                other => {
                    return Err(ModelError::UnknownRegexFlag {
                        flags: flags.to_string(),
                        flag: other,
                    })
                }
            }
        }
        Ok(parsed)
    }
}

/// A validated, compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    raw: String,
    compiled: Regex,
}

impl RegexPattern {
    /// Compiles a regex without flags.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty or does not compile.
    pub fn new(pattern: &str) -> Result<Self, ModelError> {
        Self::with_flags(pattern, RegexFlags::default())
    }

    /// Compiles a regex with the given flags.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is empty or does not compile.
    pub fn with_flags(pattern: &str, flags: RegexFlags) -> Result<Self, ModelError> {
        if pattern.is_empty() {
            return Err(ModelError::EmptyRegex);
        }
        let compiled = RegexBuilder::new(pattern)
            .dot_matches_new_line(flags.dot_all)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multi_line)
            .build()
            .map_err(|e| ModelError::InvalidRegex {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
        })
    }

    /// Returns the compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.compiled
    }

    /// Tests whether the regex matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A disallowed module together with its `import '<module>'` matcher.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    module: String,
    statement: Regex,
}

impl ImportSpec {
    /// Creates an import spec for an exact module string.
    ///
    /// # Errors
    ///
    /// Returns error if the module string is empty.
    pub fn new(module: &str) -> Result<Self, ModelError> {
        if module.is_empty() {
            return Err(ModelError::EmptyImport);
        }
        let source = format!(r#"import\s+['"]{}['"]"#, regex::escape(module));
        let statement = Regex::new(&source).map_err(|e| ModelError::InvalidRegex {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            module: module.to_string(),
            statement,
        })
    }

    /// Returns the module string.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Byte offsets of every import statement naming this module.
    pub fn offsets_in<'c>(&'c self, content: &'c str) -> impl Iterator<Item = usize> + 'c {
        self.statement.find_iter(content).map(|m| m.start())
    }
}

/// A detection regex with an identifier reported on match.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    id: String,
    pattern: RegexPattern,
}

impl NamedPattern {
    /// Creates a named pattern.
    #[must_use]
    pub fn new(id: String, pattern: RegexPattern) -> Self {
        Self { id, pattern }
    }

    /// Returns the pattern id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &RegexPattern {
        &self.pattern
    }
}

// ────────────────────────────────────────────
// Domain entities
// ────────────────────────────────────────────

/// The set of file paths a rule applies to.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    include: Vec<GlobPattern>,
    exclude: Vec<GlobPattern>,
}

impl Scope {
    /// Creates a scope. An empty include list means "every path".
    #[must_use]
    pub fn new(include: Vec<GlobPattern>, exclude: Vec<GlobPattern>) -> Self {
        Self { include, exclude }
    }

    /// Returns the include globs.
    #[must_use]
    pub fn include(&self) -> &[GlobPattern] {
        &self.include
    }

    /// Returns the exclude globs.
    #[must_use]
    pub fn exclude(&self) -> &[GlobPattern] {
        &self.exclude
    }
}

/// Detection configuration of a rule.
///
/// Every list may be empty; an empty list contributes no hits (or no
/// suppression, for the allowlists).
#[derive(Debug, Clone, Default)]
pub struct DetectConfig {
    /// Modules whose import flags the file.
    pub disallowed_imports: Vec<ImportSpec>,
    /// Modules exempted even when listed in `disallowed_imports`.
    pub allowlist_imports: HashSet<String>,
    /// Literal substrings that flag the file.
    pub disallowed_calls: Vec<String>,
    /// Named regexes that flag the file, in declaration order.
    pub patterns: Vec<NamedPattern>,
    /// Regexes whose presence suppresses any flag.
    pub allowlist_patterns: Vec<RegexPattern>,
    /// Globs of paths that are never flagged.
    pub allowlist_paths: Vec<GlobPattern>,
    /// Regexes that must all match before detection runs.
    pub require_patterns: Vec<RegexPattern>,
    /// Regexes selecting lines that detection does not see.
    pub ignore_line_patterns: Vec<RegexPattern>,
}

/// An embedded fixture: a file path and its literal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Fixture file path.
    pub path: String,
    /// Fixture file content.
    pub content: String,
}

/// Which expectation a fixture carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    /// The rule must flag the fixture.
    ShouldFlag,
    /// The rule must not flag the fixture.
    ShouldPass,
}

impl CaseKind {
    /// Returns whether a flagged result satisfies this expectation.
    #[must_use]
    pub fn expects_flag(self) -> bool {
        self == Self::ShouldFlag
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShouldFlag => write!(f, "should_flag"),
            Self::ShouldPass => write!(f, "should_pass"),
        }
    }
}

/// The self-test fixtures bundled with a rule.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    /// Cases the rule must flag.
    pub should_flag: Vec<TestCase>,
    /// Cases the rule must pass.
    pub should_pass: Vec<TestCase>,
}

impl Fixtures {
    /// Iterates `(kind, 1-based index, case)`: all `should_flag` cases first.
    pub fn iter(&self) -> impl Iterator<Item = (CaseKind, usize, &TestCase)> {
        let flag = self
            .should_flag
            .iter()
            .enumerate()
            .map(|(i, c)| (CaseKind::ShouldFlag, i + 1, c));
        let pass = self
            .should_pass
            .iter()
            .enumerate()
            .map(|(i, c)| (CaseKind::ShouldPass, i + 1, c));
        flag.chain(pass)
    }

    /// Total number of fixtures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.should_flag.len() + self.should_pass.len()
    }

    /// Returns true if the rule carries no fixtures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A validated, immutable rule definition.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    id: RuleId,
    title: String,
    scope: Scope,
    detect: DetectConfig,
    tests: Fixtures,
    severity: Severity,
    message: Option<String>,
    doc_ref: Option<String>,
}

impl RuleDefinition {
    /// Creates a new rule definition with `error` severity.
    #[must_use]
    pub fn new(
        id: RuleId,
        title: String,
        scope: Scope,
        detect: DetectConfig,
        tests: Fixtures,
    ) -> Self {
        Self {
            id,
            title,
            scope,
            detect,
            tests,
            severity: Severity::Error,
            message: None,
            doc_ref: None,
        }
    }

    /// Sets the severity used for scan violations.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the advice printed with scan violations.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the design document reference.
    #[must_use]
    pub fn with_doc_ref(mut self, doc_ref: impl Into<String>) -> Self {
        self.doc_ref = Some(doc_ref.into());
        self
    }

    /// Returns the rule id.
    #[must_use]
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    /// Returns the human-readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the applicability scope.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Returns the detection configuration.
    #[must_use]
    pub fn detect(&self) -> &DetectConfig {
        &self.detect
    }

    /// Returns the embedded fixtures.
    #[must_use]
    pub fn tests(&self) -> &Fixtures {
        &self.tests
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the advice message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the document reference.
    #[must_use]
    pub fn doc_ref(&self) -> Option<&str> {
        self.doc_ref.as_deref()
    }
}

// ────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────

/// An immutable collection of rules with unique ids.
///
/// This is the value passed to scanners and runners; there is no global
/// rule registry.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RuleDefinition>,
}

impl RuleSet {
    /// Creates a rule set, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns one error per duplicated id.
    pub fn new(rules: Vec<RuleDefinition>) -> Result<Self, Vec<ModelError>> {
        let mut set = Self::default();
        let errors: Vec<ModelError> = rules
            .into_iter()
            .filter_map(|rule| set.insert(rule).err())
            .collect();
        if errors.is_empty() {
            Ok(set)
        } else {
            Err(errors)
        }
    }

    /// Adds a rule.
    ///
    /// # Errors
    ///
    /// Returns error if a rule with the same id is already present.
    pub fn insert(&mut self, rule: RuleDefinition) -> Result<(), ModelError> {
        if self.get(rule.id()).is_some() {
            return Err(ModelError::DuplicateRuleId {
                id: rule.id().clone(),
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Adds a batch of rules, all or none.
    ///
    /// # Errors
    ///
    /// Returns error naming the first id already present in the set or
    /// repeated within the batch; the set is left unchanged.
    pub fn merge(&mut self, rules: Vec<RuleDefinition>) -> Result<(), ModelError> {
        for (i, rule) in rules.iter().enumerate() {
            let repeated = rules[..i].iter().any(|r| r.id() == rule.id());
            if repeated || self.get(rule.id()).is_some() {
                return Err(ModelError::DuplicateRuleId {
                    id: rule.id().clone(),
                });
            }
        }
        self.rules.extend(rules);
        Ok(())
    }

    /// Gets a rule by id.
    #[must_use]
    pub fn get(&self, id: &RuleId) -> Option<&RuleDefinition> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleDefinition> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the set, returning its rules in insertion order.
    #[must_use]
    pub fn into_rules(self) -> Vec<RuleDefinition> {
        self.rules
    }

    /// Keeps only the rules for which `keep` returns true.
    #[must_use]
    pub fn filter(mut self, keep: impl Fn(&RuleDefinition) -> bool) -> Self {
        self.rules.retain(|r| keep(r));
        self
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleDefinition;
    type IntoIter = std::slice::Iter<'a, RuleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────

/// Errors in domain model construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Rule id is empty.
    #[error("rule id must not be empty")]
    EmptyRuleId,

    /// Rule id contains whitespace.
    #[error("invalid rule id `{id}`: must not contain whitespace")]
    InvalidRuleId {
        /// The invalid id.
        id: String,
    },

    /// Two rules share an id.
    #[error("duplicate rule id `{id}`")]
    DuplicateRuleId {
        /// The duplicated id.
        id: RuleId,
    },

    /// Glob pattern is empty.
    #[error("glob pattern must not be empty")]
    EmptyGlobPattern,

    /// Glob pattern has invalid syntax.
    #[error("invalid glob pattern `{pattern}`: {reason}")]
    InvalidGlobPattern {
        /// The invalid pattern.
        pattern: String,
        /// Why it's invalid.
        reason: String,
    },

    /// Regex is empty.
    #[error("regex must not be empty")]
    EmptyRegex,

    /// Regex does not compile.
    #[error("invalid regex `{pattern}`: {reason}")]
    InvalidRegex {
        /// The invalid regex.
        pattern: String,
        /// Compiler message.
        reason: String,
    },

    /// Unsupported regex flag.
    #[error("unknown regex flag `{flag}` in `{flags}`, expected any of: s, i, m")]
    UnknownRegexFlag {
        /// The full flag string.
        flags: String,
        /// The offending character.
        flag: char,
    },

    /// Import module is empty.
    #[error("import module must not be empty")]
    EmptyImport,

    /// Disallowed call literal is empty.
    #[error("disallowed call must not be empty")]
    EmptyCall,

    /// Pattern id is empty.
    #[error("pattern id must not be empty")]
    EmptyPatternId,

    /// Two patterns of one rule share an id.
    #[error("duplicate pattern id `{id}`")]
    DuplicatePatternId {
        /// The duplicated id.
        id: String,
    },
}

// ────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str) -> RuleDefinition {
        RuleDefinition::new(
            RuleId::new(id).unwrap(),
            format!("{id} title"),
            Scope::default(),
            DetectConfig::default(),
            Fixtures::default(),
        )
    }

    // -- RuleId --

    #[test]
    fn rule_id_valid() {
        assert!(RuleId::new("ARCH-DS-NO-DIRECT-ACCESS").is_ok());
        assert!(RuleId::new("dart.i18n").is_ok());
    }

    #[test]
    fn rule_id_rejects_empty_and_whitespace() {
        assert!(matches!(RuleId::new(""), Err(ModelError::EmptyRuleId)));
        assert!(matches!(
            RuleId::new("no http"),
            Err(ModelError::InvalidRuleId { .. })
        ));
    }

    // -- GlobPattern --

    #[test]
    fn glob_pattern_empty_rejected() {
        assert!(matches!(
            GlobPattern::new(""),
            Err(ModelError::EmptyGlobPattern)
        ));
    }

    #[test]
    fn glob_pattern_invalid_rejected() {
        assert!(matches!(
            GlobPattern::new("lib/[data"),
            Err(ModelError::InvalidGlobPattern { .. })
        ));
    }

    #[test]
    fn glob_pattern_globstar_crosses_separators() {
        let pat = GlobPattern::new("lib/data/**").unwrap();
        assert!(pat.matches(Path::new("lib/data/foo.dart")));
        assert!(pat.matches(Path::new("lib/data/remote/api/client.dart")));
        assert!(!pat.matches(Path::new("lib/ui/foo.dart")));
        assert!(!pat.matches(Path::new("lib/database/foo.dart")));
    }

    #[test]
    fn glob_pattern_leading_globstar() {
        let pat = GlobPattern::new("**/*.dart").unwrap();
        assert!(pat.matches(Path::new("lib/main.dart")));
        assert!(pat.matches(Path::new("lib/ui/pages/home.dart")));
        assert!(!pat.matches(Path::new("lib/main.kt")));
    }

    // -- RegexFlags / RegexPattern --

    #[test]
    fn regex_flags_parse_known() {
        assert!(RegexFlags::parse("").is_ok());
        assert!(RegexFlags::parse("sim").is_ok());
    }

    #[test]
    fn regex_flags_reject_unknown() {
        assert!(matches!(
            RegexFlags::parse("ig"),
            Err(ModelError::UnknownRegexFlag { flag: 'g', .. })
        ));
    }

    #[test]
    fn regex_pattern_invalid_rejected() {
        assert!(matches!(
            RegexPattern::new("Text\\("),
            Ok(_)
        ));
        assert!(matches!(
            RegexPattern::new("Text("),
            Err(ModelError::InvalidRegex { .. })
        ));
        assert!(matches!(RegexPattern::new(""), Err(ModelError::EmptyRegex)));
    }

    #[test]
    fn regex_pattern_flags_apply() {
        let flags = RegexFlags::parse("si").unwrap();
        let pat = RegexPattern::with_flags("class.*repository", flags).unwrap();
        assert!(pat.is_match("class UserRepo\n// Repository"));
        assert!(!RegexPattern::new("class.*repository")
            .unwrap()
            .is_match("class UserRepo\n// Repository"));
    }

    // -- ImportSpec --

    #[test]
    fn import_spec_is_exact_module() {
        let spec = ImportSpec::new("a/b.dart").unwrap();
        assert_eq!(spec.offsets_in("import 'a/b.dart';").count(), 1);
        assert_eq!(spec.offsets_in("import \"a/b.dart\";").count(), 1);
        assert_eq!(spec.offsets_in("import 'a/bc.dart';").count(), 0);
        assert_eq!(spec.offsets_in("import 'a/b_dart';").count(), 0);
    }

    #[test]
    fn import_spec_empty_rejected() {
        assert!(matches!(ImportSpec::new(""), Err(ModelError::EmptyImport)));
    }

    // -- Fixtures --

    #[test]
    fn fixtures_iterate_flag_cases_first_with_one_based_index() {
        let case = |p: &str| TestCase {
            path: p.to_string(),
            content: String::new(),
        };
        let fixtures = Fixtures {
            should_flag: vec![case("a.dart"), case("b.dart")],
            should_pass: vec![case("c.dart")],
        };
        let order: Vec<(String, usize, &str)> = fixtures
            .iter()
            .map(|(kind, i, c)| (kind.to_string(), i, c.path.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("should_flag".to_string(), 1, "a.dart"),
                ("should_flag".to_string(), 2, "b.dart"),
                ("should_pass".to_string(), 1, "c.dart"),
            ]
        );
        assert_eq!(fixtures.len(), 3);
    }

    // -- RuleSet --

    #[test]
    fn rule_set_rejects_duplicate_ids() {
        let errors = RuleSet::new(vec![rule("A"), rule("B"), rule("A")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ModelError::DuplicateRuleId { id } if id.as_str() == "A"));
    }

    #[test]
    fn rule_set_merge_is_all_or_nothing() {
        let mut set = RuleSet::new(vec![rule("A")]).unwrap();

        let err = set.merge(vec![rule("B"), rule("A")]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate rule id `A`");
        assert_eq!(set.len(), 1);

        assert!(set.merge(vec![rule("C"), rule("C")]).is_err());
        assert_eq!(set.len(), 1);

        set.merge(vec![rule("B"), rule("C")]).unwrap();
        let ids: Vec<&str> = set.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn rule_set_lookup_and_filter() {
        let set = RuleSet::new(vec![rule("A"), rule("B")]).unwrap();
        assert!(set.get(&RuleId::new("B").unwrap()).is_some());
        let set = set.filter(|r| r.id().as_str() != "A");
        assert_eq!(set.len(), 1);
        assert!(set.get(&RuleId::new("A").unwrap()).is_none());
    }
}
