//! The rule evaluator: one rule, one file, one decision.
//!
//! Gates run in a fixed order and short-circuit:
//!
//! ```text
//! scope ─▶ allowlist_paths ─▶ allowlist_patterns ─▶ require_patterns ─▶ detectors
//!   │            │                    │                    │                │
//! PASS         PASS                 PASS                 PASS         FLAG iff any hit
//! ```
//!
//! Allow signals therefore always dominate deny signals.

use std::path::Path;

use tracing::debug;

use crate::matchers::{self, Match, MatchKind};
use crate::rule::{DetectConfig, RuleDefinition};
use crate::scope;

/// Which gate decided the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The path is outside the rule's scope.
    OutOfScope,
    /// The path matches an `allowlist_paths` glob.
    PathAllowlisted,
    /// The content matches an `allowlist_patterns` regex.
    ContentAllowlisted,
    /// Some `require_patterns` regex did not match.
    PreconditionUnmet,
    /// All gates passed and no detector fired.
    Clean,
    /// At least one detector fired.
    Flagged,
}

/// Outcome of evaluating one rule against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    verdict: Verdict,
    matches: Vec<Match>,
}

impl EvaluationResult {
    fn pass(verdict: Verdict) -> Self {
        Self {
            verdict,
            matches: Vec::new(),
        }
    }

    /// Returns true if the rule flags the file.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.verdict == Verdict::Flagged
    }

    /// Returns the deciding gate.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the detector hits (empty unless flagged).
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Consumes the result, returning its hits.
    #[must_use]
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

struct Detector {
    kind: MatchKind,
    run: fn(&DetectConfig, &str) -> Vec<Match>,
}

const DETECTORS: &[Detector] = &[
    Detector {
        kind: MatchKind::Import,
        run: matchers::find_imports,
    },
    Detector {
        kind: MatchKind::Call,
        run: matchers::find_calls,
    },
    Detector {
        kind: MatchKind::Pattern,
        run: matchers::find_patterns,
    },
];

/// Evaluates `rule` against a file's path and content.
///
/// Pure and infallible: every regex and glob was compiled when the rule
/// was loaded, so equal inputs always give equal results.
#[must_use]
pub fn evaluate(rule: &RuleDefinition, path: &Path, content: &str) -> EvaluationResult {
    let id = rule.id();
    let detect = rule.detect();

    if !scope::in_scope(rule, path) {
        debug!("{id}: {} out of scope", path.display());
        return EvaluationResult::pass(Verdict::OutOfScope);
    }
    if scope::path_allowlisted(rule, path) {
        debug!("{id}: {} path allowlisted", path.display());
        return EvaluationResult::pass(Verdict::PathAllowlisted);
    }
    if matchers::content_allowlisted(detect, content) {
        debug!("{id}: {} content allowlisted", path.display());
        return EvaluationResult::pass(Verdict::ContentAllowlisted);
    }
    if !matchers::preconditions_met(detect, content) {
        debug!("{id}: {} preconditions unmet", path.display());
        return EvaluationResult::pass(Verdict::PreconditionUnmet);
    }

    let visible = matchers::blank_ignored_lines(detect, content);
    let mut matches = Vec::new();
    for detector in DETECTORS {
        let hits = (detector.run)(detect, &visible);
        if !hits.is_empty() {
            debug!(
                "{id}: {} {} {} hit(s)",
                path.display(),
                hits.len(),
                detector.kind
            );
        }
        matches.extend(hits);
    }

    if matches.is_empty() {
        EvaluationResult::pass(Verdict::Clean)
    } else {
        EvaluationResult {
            verdict: Verdict::Flagged,
            matches,
        }
    }
}
