//! Fixture runner: checks each rule against its own embedded test cases.
//!
//! Every `should_flag` case must be flagged by the evaluator and every
//! `should_pass` case must not be. A rule file that fails to load counts
//! as a single failure; the remaining files still run.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::evaluator::evaluate;
use crate::rule::{load_rule_file, CaseKind, RuleDefinition, RuleSet};

/// Outcome of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Rule file label the case came from.
    pub file: String,
    /// Which expectation the case carries.
    pub kind: CaseKind,
    /// 1-based index within its kind.
    pub index: usize,
    /// Fixture path.
    pub path: String,
    /// Whether the evaluator met the expectation.
    pub passed: bool,
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "OK" } else { "FAIL" };
        write!(
            f,
            "[{status}] {} {} #{}: {}",
            self.file, self.kind, self.index, self.path
        )
    }
}

/// Outcome of one rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFileReport {
    /// The file loaded; one report per fixture of every rule in it.
    Ran {
        /// Rule file label.
        file: String,
        /// Fixture reports in file order.
        cases: Vec<CaseReport>,
    },
    /// The file could not be read, parsed or validated.
    LoadFailed {
        /// Rule file label.
        file: String,
        /// Human-readable cause.
        cause: String,
    },
}

impl RuleFileReport {
    /// Number of failures contributed by this file.
    #[must_use]
    pub fn failures(&self) -> usize {
        match self {
            Self::Ran { cases, .. } => cases.iter().filter(|c| !c.passed).count(),
            Self::LoadFailed { .. } => 1,
        }
    }

    /// Report lines for this file.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Ran { cases, .. } => cases.iter().map(ToString::to_string).collect(),
            Self::LoadFailed { file, cause } => vec![format!("[FAIL] {file} load: {cause}")],
        }
    }
}

/// Aggregate outcome of a fixture run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-file reports in run order.
    pub files: Vec<RuleFileReport>,
}

impl RunSummary {
    /// Total number of failed cases and failed loads.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.files.iter().map(RuleFileReport::failures).sum()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    /// All report lines, in run order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.files.iter().flat_map(RuleFileReport::lines).collect()
    }

    /// `ALL GREEN` or `FAILED: <n> test(s)`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        match self.failures() {
            0 => "ALL GREEN".to_string(),
            n => format!("FAILED: {n} test(s)"),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        write!(f, "\n{}", self.summary_line())
    }
}

/// Runs one rule's fixtures, labelling reports with `file`.
#[must_use]
pub fn run_rule(rule: &RuleDefinition, file: &str) -> Vec<CaseReport> {
    rule.tests()
        .iter()
        .map(|(kind, index, case)| {
            let flagged = evaluate(rule, Path::new(&case.path), &case.content).is_flagged();
            let passed = flagged == kind.expects_flag();
            debug!(
                "{}: {kind} #{index} {} (flagged: {flagged})",
                rule.id(),
                if passed { "ok" } else { "failed" }
            );
            CaseReport {
                file: file.to_string(),
                kind,
                index,
                path: case.path.clone(),
                passed,
            }
        })
        .collect()
}

/// Runs rule files one after another, remembering the ids seen so far.
///
/// A file that redefines an id from an earlier file is a load failure.
#[derive(Debug, Default)]
pub struct FixtureRunner {
    seen: RuleSet,
    summary: RunSummary,
}

impl FixtureRunner {
    /// Creates an empty runner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs already-loaded rules under the given label.
    pub fn run_rules(&mut self, file: &str, rules: Vec<RuleDefinition>) {
        let cases = rules.iter().flat_map(|rule| run_rule(rule, file)).collect();
        if let Err(cause) = self.seen.merge(rules) {
            self.load_failed(file, cause.to_string());
            return;
        }
        self.summary.files.push(RuleFileReport::Ran {
            file: file.to_string(),
            cases,
        });
    }

    /// Loads and runs one rule file, labelled by its path as given.
    pub fn run_file(&mut self, path: &Path) {
        let file = path.display().to_string();
        match load_rule_file(path) {
            Ok(rules) => self.run_rules(&file, rules),
            Err(err) => self.load_failed(&file, err.cause()),
        }
    }

    /// Records a load failure for `file`.
    pub fn load_failed(&mut self, file: &str, cause: String) {
        debug!("{file}: load failed: {cause}");
        self.summary.files.push(RuleFileReport::LoadFailed {
            file: file.to_string(),
            cause,
        });
    }

    /// Finishes the run.
    #[must_use]
    pub fn finish(self) -> RunSummary {
        info!(
            "Ran {} rule file(s), {} failure(s)",
            self.summary.files.len(),
            self.summary.failures()
        );
        self.summary
    }
}

/// Loads and runs every rule file.
#[must_use]
pub fn run_rule_files<P: AsRef<Path>>(paths: &[P]) -> RunSummary {
    let mut runner = FixtureRunner::new();
    for path in paths {
        runner.run_file(path.as_ref());
    }
    runner.finish()
}
