//! Scope resolution: which paths a rule applies to and which it exempts.

use std::path::Path;

use crate::rule::{GlobPattern, RuleDefinition};

fn matches_any(patterns: &[GlobPattern], path: &Path) -> bool {
    patterns.iter().any(|p| p.matches(path))
}

/// Tests whether `path` falls within the rule's scope.
///
/// An empty include list matches every path; an empty exclude list
/// excludes nothing.
#[must_use]
pub fn in_scope(rule: &RuleDefinition, path: &Path) -> bool {
    let scope = rule.scope();
    let included = scope.include().is_empty() || matches_any(scope.include(), path);
    included && !matches_any(scope.exclude(), path)
}

/// Tests whether `path` is exempted by the rule's `allowlist_paths`.
#[must_use]
pub fn path_allowlisted(rule: &RuleDefinition, path: &Path) -> bool {
    matches_any(&rule.detect().allowlist_paths, path)
}
