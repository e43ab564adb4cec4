//! Rule presets for common configurations.

use crate::builtin_rules;
use archrule_core::{RuleFileError, RuleSet};

/// Preset configurations for archrule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Layering rules: data access, abstractions, stateless repositories.
    Recommended,
    /// Every built-in rule, including localization.
    Strict,
    /// Only the data-access rule, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Parses a preset name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Returns the preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Ids of the rules in this preset.
    #[must_use]
    pub fn rule_ids(self) -> &'static [&'static str] {
        match self {
            Self::Recommended => &[
                "ARCH-DS-NO-DIRECT-ACCESS",
                "ARCH-IMPORT-ABSTRACTION",
                "ARCH-REPO-STATELESS",
            ],
            Self::Strict => &[
                "ARCH-DS-NO-DIRECT-ACCESS",
                "ARCH-IMPORT-ABSTRACTION",
                "ARCH-REPO-STATELESS",
                "DART-I18N-NO-HARDCODED-TEXT",
            ],
            Self::Minimal => &["ARCH-DS-NO-DIRECT-ACCESS"],
        }
    }

    /// Returns the rules for this preset.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded rule file is invalid.
    pub fn rules(self) -> Result<RuleSet, RuleFileError> {
        let ids = self.rule_ids();
        Ok(builtin_rules()?.filter(|r| ids.contains(&r.id().as_str())))
    }
}

/// Returns all available rules.
///
/// # Errors
///
/// Returns an error if an embedded rule file is invalid.
pub fn all_rules() -> Result<RuleSet, RuleFileError> {
    builtin_rules()
}
