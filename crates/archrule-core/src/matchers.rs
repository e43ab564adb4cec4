//! Text matchers over raw file content.
//!
//! All matchers are stateless: they read a [`DetectConfig`] whose regexes
//! were compiled at load time and never fail. An empty list yields no hits.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::rule::DetectConfig;

/// Which detector produced a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// A disallowed `import '<module>'` statement.
    Import,
    /// A disallowed literal call substring.
    Call,
    /// A named detection regex.
    Pattern,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import => write!(f, "import"),
            Self::Call => write!(f, "call"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// One detector hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Detector that fired.
    pub kind: MatchKind,
    /// Module, call literal or pattern id.
    pub id: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in characters, of the first occurrence on the line.
    pub column: usize,
}

impl Match {
    fn at(kind: MatchKind, id: &str, content: &str, offset: usize) -> Self {
        let (line, column) = position_of(content, offset);
        Self {
            kind,
            id: id.to_string(),
            line,
            column,
        }
    }

    /// Short human description, e.g. ``disallowed call `http.get(` ``.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            MatchKind::Import => format!("disallowed import `{}`", self.id),
            MatchKind::Call => format!("disallowed call `{}`", self.id),
            MatchKind::Pattern => format!("matched pattern `{}`", self.id),
        }
    }
}

/// Converts a byte offset into a 1-based `(line, column)` pair.
#[must_use]
pub fn position_of(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

// ────────────────────────────────────────────
// Detectors
// ────────────────────────────────────────────

/// One match per line from a sorted sequence of byte offsets.
fn per_line(
    kind: MatchKind,
    id: &str,
    content: &str,
    offsets: impl Iterator<Item = usize>,
) -> Vec<Match> {
    let mut hits: Vec<Match> = Vec::new();
    for offset in offsets {
        let hit = Match::at(kind, id, content, offset);
        if hits.last().map_or(true, |last| last.line != hit.line) {
            hits.push(hit);
        }
    }
    hits
}

/// Finds `import` statements of disallowed modules, one hit per line.
///
/// Modules listed in `allowlist_imports` are never reported.
#[must_use]
pub fn find_imports(detect: &DetectConfig, content: &str) -> Vec<Match> {
    detect
        .disallowed_imports
        .iter()
        .filter(|spec| !detect.allowlist_imports.contains(spec.module()))
        .flat_map(|spec| {
            per_line(
                MatchKind::Import,
                spec.module(),
                content,
                spec.offsets_in(content),
            )
        })
        .collect()
}

/// Finds literal occurrences of disallowed call substrings, one hit per line.
#[must_use]
pub fn find_calls(detect: &DetectConfig, content: &str) -> Vec<Match> {
    detect
        .disallowed_calls
        .iter()
        .flat_map(|call| {
            let offsets = content.match_indices(call.as_str()).map(|(i, _)| i);
            per_line(MatchKind::Call, call, content, offsets)
        })
        .collect()
}

/// Runs every named pattern in declaration order, one hit per matching line.
///
/// A match spanning several lines is reported on the line it starts.
#[must_use]
pub fn find_patterns(detect: &DetectConfig, content: &str) -> Vec<Match> {
    detect
        .patterns
        .iter()
        .flat_map(|named| {
            let offsets = named.pattern().regex().find_iter(content).map(|m| m.start());
            per_line(MatchKind::Pattern, named.id(), content, offsets)
        })
        .collect()
}

// ────────────────────────────────────────────
// Gates
// ────────────────────────────────────────────

/// Returns true if any allowlist pattern matches the content.
#[must_use]
pub fn content_allowlisted(detect: &DetectConfig, content: &str) -> bool {
    detect.allowlist_patterns.iter().any(|p| p.is_match(content))
}

/// Returns true if every require pattern matches (vacuously true when empty).
#[must_use]
pub fn preconditions_met(detect: &DetectConfig, content: &str) -> bool {
    detect.require_patterns.iter().all(|p| p.is_match(content))
}

/// Blanks every line matched by an ignore-line pattern.
///
/// Line breaks are kept so line numbers of the remaining text do not move.
/// Borrows the input unchanged when there is nothing to blank.
#[must_use]
pub fn blank_ignored_lines<'a>(detect: &DetectConfig, content: &'a str) -> Cow<'a, str> {
    if detect.ignore_line_patterns.is_empty() {
        return Cow::Borrowed(content);
    }

    let ignored = |line: &str| detect.ignore_line_patterns.iter().any(|p| p.is_match(line));
    let mut blanked = false;
    let mut out = String::with_capacity(content.len());

    for raw in content.split_inclusive('\n') {
        let (line, newline) = match raw.strip_suffix('\n') {
            Some(stripped) => (stripped, "\n"),
            None => (raw, ""),
        };
        if ignored(line) {
            blanked = true;
            out.push_str(newline);
        } else {
            out.push_str(raw);
        }
    }

    if blanked {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(content)
    }
}
