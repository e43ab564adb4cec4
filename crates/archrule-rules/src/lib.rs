//! # archrule-rules
//!
//! Built-in architecture rules for Flutter/Dart projects.
//!
//! Every rule is an ordinary declarative rule file embedded in the crate,
//! evaluated by the same engine as user rules and carrying its own
//! fixtures.
//!
//! ## Available Rules
//!
//! | Id | Description |
//! |----|-------------|
//! | `ARCH-DS-NO-DIRECT-ACCESS` | No direct Firebase, SQLite or HTTP access |
//! | `ARCH-IMPORT-ABSTRACTION` | Import repository/service interfaces, not implementations |
//! | `ARCH-REPO-STATELESS` | Repositories have no `init`/`setup` methods |
//! | `DART-I18N-NO-HARDCODED-TEXT` | No non-ASCII literals in UI widgets |
//!
//! ## Usage
//!
//! ```
//! use archrule_rules::Preset;
//!
//! let rules = Preset::Recommended.rules()?;
//! assert_eq!(rules.len(), 3);
//! # Ok::<(), archrule_core::RuleFileError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;

use archrule_core::rule::{parse_rules, RuleFormat};
use archrule_core::{RuleFileError, RuleSet};
use tracing::debug;

pub use presets::{all_rules, Preset};

/// Re-export core types for convenience.
pub use archrule_core::{RuleDefinition, Severity};

/// Embedded rule sources as `(file name, YAML text)`.
pub const BUILTIN_SOURCES: &[(&str, &str)] = &[
    (
        "ds-no-direct-access.rule.yaml",
        include_str!("../rules/ds-no-direct-access.rule.yaml"),
    ),
    (
        "import-abstraction.rule.yaml",
        include_str!("../rules/import-abstraction.rule.yaml"),
    ),
    (
        "repo-stateless.rule.yaml",
        include_str!("../rules/repo-stateless.rule.yaml"),
    ),
    (
        "i18n-no-hardcoded-text.rule.yaml",
        include_str!("../rules/i18n-no-hardcoded-text.rule.yaml"),
    ),
];

/// Parses every built-in rule.
///
/// # Errors
///
/// Returns an error if an embedded rule file is invalid.
pub fn builtin_rules() -> Result<RuleSet, RuleFileError> {
    let mut set = RuleSet::default();
    for (name, source) in BUILTIN_SOURCES {
        for rule in parse_rules(name, source, RuleFormat::Yaml)? {
            set.insert(rule).map_err(|source| RuleFileError::Duplicate {
                name: (*name).to_string(),
                source,
            })?;
        }
    }
    debug!("Loaded {} built-in rule(s)", set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use archrule_core::run_rule;

    #[test]
    fn builtin_rules_parse() {
        let ids: Vec<String> = builtin_rules()
            .unwrap()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        insta::assert_snapshot!(ids.join("\n"), @r"
        ARCH-DS-NO-DIRECT-ACCESS
        ARCH-IMPORT-ABSTRACTION
        ARCH-REPO-STATELESS
        DART-I18N-NO-HARDCODED-TEXT
        ");
    }

    #[test]
    fn builtin_fixtures_pass() {
        for rule in &builtin_rules().unwrap() {
            assert!(!rule.tests().is_empty(), "{} has no fixtures", rule.id());
            for report in run_rule(rule, "builtin") {
                assert!(report.passed, "{}: {report}", rule.id());
            }
        }
    }

    #[test]
    fn builtin_rules_carry_advice() {
        for rule in &builtin_rules().unwrap() {
            assert!(rule.message().is_some(), "{} has no message", rule.id());
            assert!(!rule.title().is_empty(), "{} has no title", rule.id());
        }
    }
}
