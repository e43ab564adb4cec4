//! Scanner for real source files.
//!
//! Evaluates a [`RuleSet`] over files on disk and turns every detector hit
//! into a located [`Violation`]. Files that cannot be read are skipped with
//! a warning and recorded in [`LintResult::skipped`].

use crate::config::Config;
use crate::evaluator::evaluate;
use crate::matchers::Match;
use crate::rule::{GlobPattern, ModelError, RuleDefinition, RuleSet};
use crate::types::{LintResult, Location, SkippedFile, Suggestion, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while setting up or walking a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error resolving the root directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking a directory.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Invalid exclude pattern.
    #[error("Invalid exclude pattern: {0}")]
    Exclude(#[from] ModelError),
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleDefinition>,
    extensions: Vec<String>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl ScannerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory that rule globs are relative to.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds one rule.
    #[must_use]
    pub fn rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds every rule of a set.
    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules.extend(rules.into_rules());
        self
    }

    /// Adds a file extension to check, without the dot.
    #[must_use]
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the scanner.
    ///
    /// Rules disabled in the configuration are dropped here; the first
    /// rule wins when two share an id.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be resolved or an
    /// exclude pattern is invalid.
    pub fn build(self) -> Result<Scanner, ScanError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut extensions = self.extensions;
        if extensions.is_empty() {
            extensions.clone_from(&config.check.extensions);
        }

        let exclude = self
            .exclude_patterns
            .iter()
            .chain(&config.check.exclude)
            .map(|p| GlobPattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rules = RuleSet::default();
        for rule in self.rules {
            let id = rule.id().to_string();
            if !config.is_rule_enabled(&id) {
                debug!("Skipping disabled rule: {id}");
                continue;
            }
            if rules.insert(rule).is_err() {
                warn!("Ignoring duplicate rule id: {id}");
            }
        }

        Ok(Scanner {
            root,
            rules,
            extensions,
            exclude,
            config,
        })
    }
}

/// Evaluates rules over files on disk.
///
/// Use [`Scanner::builder()`] to construct an instance.
pub struct Scanner {
    root: PathBuf,
    rules: RuleSet,
    extensions: Vec<String>,
    exclude: Vec<GlobPattern>,
    config: Config,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the active rules.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Walks the given files and directories (or the root when empty) and
    /// scans every matching file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory walk fails.
    pub fn scan_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LintResult, ScanError> {
        let files = self.discover(paths)?;
        Ok(self.scan_files(&files))
    }

    /// Finds the files to scan below the given paths (or the root).
    ///
    /// # Errors
    ///
    /// Returns an error if a directory walk fails.
    pub fn discover<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>, ScanError> {
        let starts: Vec<PathBuf> = if paths.is_empty() {
            vec![self.root.clone()]
        } else {
            paths.iter().map(|p| self.absolute(p.as_ref())).collect()
        };

        let mut files = Vec::new();
        for start in starts {
            if start.is_file() {
                if self.wants(&start) {
                    files.push(start);
                }
                continue;
            }

            let mut builder = ignore::WalkBuilder::new(&start);
            builder
                .git_ignore(self.config.check.respect_gitignore)
                .require_git(false);

            for entry in builder.build() {
                let entry = entry?;
                let path = entry.path();
                if path.is_file() && self.wants(path) {
                    files.push(path.to_path_buf());
                } else if path.is_file() {
                    debug!("Excluding: {}", path.display());
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Scans the given files.
    ///
    /// Files with other extensions or matching an exclude pattern are
    /// ignored; unreadable files are skipped with a warning.
    #[must_use]
    pub fn scan_files<P: AsRef<Path>>(&self, files: &[P]) -> LintResult {
        let mut result = LintResult::new();

        for file in files {
            let full = self.absolute(file.as_ref());
            if !self.wants(&full) {
                debug!("Not checked: {}", full.display());
                continue;
            }
            let rel = self.relative(&full);

            match std::fs::read_to_string(&full) {
                Ok(content) => {
                    result.violations.extend(self.check_source(rel, &content));
                    result.files_checked += 1;
                }
                Err(e) => {
                    warn!("Skipping {}: {e}", rel.display());
                    result.skipped.push(SkippedFile {
                        path: rel.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        result.sort();
        info!(
            "Scan complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );
        result
    }

    /// Evaluates every rule against one file's relative path and content.
    #[must_use]
    pub fn check_source(&self, path: &Path, content: &str) -> Vec<Violation> {
        debug!("Checking: {}", path.display());
        self.rules
            .iter()
            .flat_map(|rule| {
                evaluate(rule, path, content)
                    .into_matches()
                    .into_iter()
                    .map(move |m| self.violation(rule, path, &m))
            })
            .collect()
    }

    fn violation(&self, rule: &RuleDefinition, path: &Path, m: &Match) -> Violation {
        let id = rule.id().as_str();
        let severity = self.config.rule_severity(id).unwrap_or(rule.severity());
        let title = if rule.title().is_empty() { id } else { rule.title() };

        let mut violation = Violation::new(
            id,
            title,
            severity,
            Location::new(path.to_path_buf(), m.line, m.column),
            m.describe(),
        );
        if let Some(message) = rule.message() {
            violation = violation.with_suggestion(Suggestion::new(message));
        }
        if let Some(doc_ref) = rule.doc_ref() {
            violation = violation.with_doc_ref(doc_ref);
        }
        violation
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Checks the extension filter and exclude patterns.
    fn wants(&self, path: &Path) -> bool {
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x == e));
        let rel = self.relative(path);
        ext_ok && !self.exclude.iter().any(|p| p.matches(rel))
    }
}
