//! # archrule-core
//!
//! Rule evaluation engine for declarative architecture rules.
//!
//! A rule says *where* it applies (scope globs), *what* it forbids
//! (imports, call substrings, regex patterns) and *what* exempts a file
//! (path and content allowlists). The engine decides, for one rule and one
//! file, whether the file violates the rule. It never parses the target
//! language: detection is purely line and regex based.
//!
//! - [`rule`] loads and validates rule files (YAML, JSON, TOML)
//! - [`evaluate`] is the pure evaluator
//! - [`runner`] checks rules against their embedded fixtures
//! - [`Scanner`] evaluates a rule set over files on disk
//!
//! ## Example
//!
//! ```
//! use archrule_core::rule::{parse_rules, RuleFormat};
//! use archrule_core::evaluate;
//! use std::path::Path;
//!
//! let rules = parse_rules(
//!     "no-http.rule.yaml",
//!     r#"
//! id: DATA-NO-HTTP
//! scope:
//!   include_paths: ["lib/data/**"]
//! detect:
//!   disallowed_calls: ["http.get("]
//! "#,
//!     RuleFormat::Yaml,
//! )?;
//!
//! let rule = &rules[0];
//! assert!(evaluate(rule, Path::new("lib/data/foo.dart"), "http.get(url)").is_flagged());
//! assert!(!evaluate(rule, Path::new("lib/ui/foo.dart"), "http.get(url)").is_flagged());
//! # Ok::<(), archrule_core::rule::RuleFileError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod evaluator;
pub mod matchers;
pub mod rule;
pub mod runner;
pub mod scanner;
pub mod scope;
mod types;

pub use config::{Config, ConfigError};
pub use evaluator::{evaluate, EvaluationResult, Verdict};
pub use matchers::{Match, MatchKind};
pub use rule::{RuleDefinition, RuleFileError, RuleId, RuleSet};
pub use runner::{run_rule, run_rule_files, CaseReport, FixtureRunner, RuleFileReport, RunSummary};
pub use scanner::{ScanError, Scanner, ScannerBuilder};
pub use types::{LintResult, Location, Severity, SkippedFile, Suggestion, Violation};
