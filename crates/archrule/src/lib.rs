//! # archrule
//!
//! Declarative architecture rules for any source tree.
//!
//! Rules are data files (YAML, JSON or TOML) describing where a rule
//! applies, what it forbids, and fixtures proving both. This is the facade
//! crate that re-exports the engine and the built-in rules.
//!
//! ## Quick Start: `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! archrule = "0.3"
//! ```
//!
//! ```rust,ignore
//! // tests/architecture_rules.rs
//! archrule::check_rules!("rules/*.rule.yaml");
//! ```
//!
//! The generated test runs every fixture in the matched rule files and
//! fails with the full report when a case fails. Without arguments the
//! `[check] rules` patterns of `archrule.toml` are used.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use archrule::Scanner;
//! use archrule::rules::Preset;
//!
//! let scanner = Scanner::builder()
//!     .root("./app")
//!     .rules(Preset::Recommended.rules()?)
//!     .build()?;
//!
//! let result = scanner.scan_paths(&["lib"])?;
//! ```

#![forbid(unsafe_code)]

pub use archrule_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use archrule_rules::*;
}

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::run_fixture_check;
}

/// Generates a `#[test]` that runs the fixtures of rule files.
///
/// Patterns are globs relative to the workspace root. With no patterns the
/// `[check] rules` list of the project's `archrule.toml` is used.
///
/// ```rust,ignore
/// archrule::check_rules!("rules/*.rule.yaml", "rules/legacy.rules.json");
/// ```
#[macro_export]
macro_rules! check_rules {
    () => {
        #[test]
        fn archrule_rule_fixtures() {
            $crate::__internal::run_fixture_check(&[]);
        }
    };
    ($($pattern:expr),+ $(,)?) => {
        #[test]
        fn archrule_rule_fixtures() {
            $crate::__internal::run_fixture_check(&[$($pattern),+]);
        }
    };
}
