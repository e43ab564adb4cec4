//! Internal runner for `check_rules!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.

use archrule_core::rule::load_rule_file;
use archrule_core::{Config, FixtureRunner, RunSummary};
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["archrule.toml", ".archrule.toml"];

/// Runs rule fixtures as part of `cargo test`.
///
/// # Panics
///
/// Panics with the full report if any fixture fails or a rule file cannot
/// be loaded, and when the patterns match no rule file at all.
pub fn run_fixture_check(patterns: &[&str]) {
    let root = find_project_root();
    let patterns: Vec<String> = if patterns.is_empty() {
        configured_patterns(&root)
    } else {
        patterns.iter().map(ToString::to_string).collect()
    };

    let summary = run_in(&root, &patterns).unwrap_or_else(|e| panic!("archrule: {e}"));
    if !summary.is_success() {
        panic!("{summary}");
    }
}

/// Expands `patterns` below `root` and runs every matched rule file.
fn run_in(root: &Path, patterns: &[String]) -> Result<RunSummary, String> {
    let files = expand(root, patterns)?;
    if files.is_empty() {
        return Err(format!("no rule files match {}", patterns.join(", ")));
    }

    let mut runner = FixtureRunner::new();
    for path in &files {
        let label = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();
        match load_rule_file(path) {
            Ok(rules) => runner.run_rules(&label, rules),
            Err(err) => runner.load_failed(&label, err.cause()),
        }
    }
    Ok(runner.finish())
}

/// Expands glob patterns relative to `root`. Plain paths are kept so that a
/// missing file surfaces as a load failure.
fn expand(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for pattern in patterns {
        let full = root.join(pattern);
        if !pattern.contains(|c| matches!(c, '*' | '?' | '[')) {
            files.push(full);
            continue;
        }
        let full = full.to_string_lossy().into_owned();
        let paths = glob::glob(&full).map_err(|e| format!("invalid pattern `{pattern}`: {e}"))?;
        let mut matched: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
        matched.sort();
        files.extend(matched);
    }
    Ok(files)
}

/// Reads the `[check] rules` patterns from the project config.
fn configured_patterns(root: &Path) -> Vec<String> {
    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            let config = Config::from_file(&path).unwrap_or_else(|e| {
                panic!("archrule: failed to load {}: {e}", path.display());
            });
            return config.check.rules;
        }
    }
    Vec::new()
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        return manifest_path;
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GOOD: &str = r#"
id: DATA-NO-HTTP
scope:
  include_paths: ["lib/data/**"]
detect:
  disallowed_calls: ["http.get("]
tests:
  should_flag:
    - path: lib/data/foo.dart
      content: "http.get(url)"
"#;

    fn workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("rules")).unwrap();
        fs::write(dir.path().join("rules/good.rule.yaml"), GOOD).unwrap();
        dir
    }

    #[test]
    fn workspace_section_detected() {
        let dir = TempDir::new().unwrap();
        let cargo = dir.path().join("Cargo.toml");
        fs::write(&cargo, "[workspace]\nmembers = []\n").unwrap();
        assert!(has_workspace_section(&cargo));

        fs::write(&cargo, "# [workspace]\n[package]\nname = \"x\"\n").unwrap();
        assert!(!has_workspace_section(&cargo));
    }

    #[test]
    fn reports_are_labelled_relative_to_root() {
        let dir = workspace();
        let summary = run_in(dir.path(), &["rules/*.rule.yaml".to_string()]).unwrap();
        assert!(summary.is_success());
        assert_eq!(
            summary.lines(),
            vec!["[OK] rules/good.rule.yaml should_flag #1: lib/data/foo.dart"]
        );
    }

    #[test]
    fn missing_literal_is_load_failure() {
        let dir = workspace();
        let summary = run_in(dir.path(), &["rules/gone.rule.yaml".to_string()]).unwrap();
        assert_eq!(summary.failures(), 1);
        assert!(summary.lines()[0].starts_with("[FAIL] rules/gone.rule.yaml load: "));
    }

    #[test]
    fn unmatched_globs_are_an_error() {
        let dir = workspace();
        let err = run_in(dir.path(), &["other/*.rule.yaml".to_string()]).unwrap_err();
        assert!(err.contains("no rule files match"));
    }

    #[test]
    fn patterns_fall_back_to_config() {
        let dir = workspace();
        fs::write(
            dir.path().join("archrule.toml"),
            "[check]\nrules = [\"rules/*.rule.yaml\"]\n",
        )
        .unwrap();
        assert_eq!(configured_patterns(dir.path()), vec!["rules/*.rule.yaml"]);

        let empty = TempDir::new().unwrap();
        assert!(configured_patterns(empty.path()).is_empty());
    }
}
