//! Integration test: rule files → loader → evaluator → runner / scanner.
//!
//! Uses fixture files under `tests/fixtures/`.

use archrule_core::rule::{load_rule_file, load_rule_set};
use archrule_core::{evaluate, run_rule_files, Config, Scanner, Severity, Verdict};
use std::path::{Path, PathBuf};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn rule_file(name: &str) -> PathBuf {
    fixtures().join("rules").join(name)
}

// ── Evaluator scenarios ──

#[test]
fn disallowed_call_in_scope_is_flagged() {
    let rules = load_rule_file(&rule_file("data-no-http.rule.yaml")).expect("fixture loads");
    let result = evaluate(&rules[0], Path::new("lib/data/foo.dart"), "http.get(url)");
    assert!(result.is_flagged());
}

#[test]
fn same_call_out_of_scope_passes() {
    let rules = load_rule_file(&rule_file("data-no-http.rule.yaml")).expect("fixture loads");
    let result = evaluate(&rules[0], Path::new("lib/ui/foo.dart"), "http.get(url)");
    assert_eq!(result.verdict(), Verdict::OutOfScope);
}

#[test]
fn allowlisted_path_with_disallowed_import_passes() {
    let rules = load_rule_file(&rule_file("data-no-http.rule.yaml")).expect("fixture loads");
    let result = evaluate(
        &rules[0],
        Path::new("lib/data/legacy/old.dart"),
        "import 'package:http/http.dart';\n",
    );
    assert_eq!(result.verdict(), Verdict::PathAllowlisted);
}

#[test]
fn arch_ignore_comment_suppresses_pattern() {
    let rules = load_rule_file(&rule_file("arch-ignore.rule.yaml")).expect("fixture loads");
    let content = "final db = FirebaseFirestore.instance; // arch-ignore\n";
    let result = evaluate(&rules[0], Path::new("lib/ui/home.dart"), content);
    assert_eq!(result.verdict(), Verdict::ContentAllowlisted);
}

// ── Fixture runner ──

#[test]
fn healthy_rule_files_are_all_green() {
    let summary = run_rule_files(&[
        rule_file("data-no-http.rule.yaml"),
        rule_file("arch-ignore.rule.yaml"),
        rule_file("layers.rules.json"),
        rule_file("naming.rules.toml"),
    ]);
    assert!(summary.is_success(), "{summary}");
    assert_eq!(summary.summary_line(), "ALL GREEN");
    // 5 + 2 + 4 + 2 fixtures.
    assert_eq!(summary.lines().len(), 13);
}

#[test]
fn unflagged_should_flag_case_yields_one_fail_line() {
    let path = rule_file("broken-fixture.rule.yaml");
    let summary = run_rule_files(&[&path]);

    let fails: Vec<String> = summary
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("[FAIL]"))
        .collect();
    assert_eq!(
        fails,
        vec![format!(
            "[FAIL] {} should_flag #2: lib/data/bar.dart",
            path.display()
        )]
    );
    assert_eq!(summary.failures(), 1);
    assert_eq!(summary.summary_line(), "FAILED: 1 test(s)");
}

#[test]
fn malformed_regex_fails_its_file_only() {
    let broken = rule_file("malformed-regex.rule.yaml");
    let summary = run_rule_files(&[broken.clone(), rule_file("arch-ignore.rule.yaml")]);
    let lines = summary.lines();

    assert_eq!(summary.failures(), 1);
    assert!(
        lines[0].starts_with(&format!("[FAIL] {} load: ", broken.display())),
        "{}",
        lines[0]
    );
    assert!(lines[0].contains("BROKEN-REGEX.detect.patterns[0].regex"));
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().all(|l| l.starts_with("[OK]")));
}

#[test]
fn same_file_twice_is_duplicate_id_failure() {
    let path = rule_file("arch-ignore.rule.yaml");
    let summary = run_rule_files(&[&path, &path]);
    assert_eq!(summary.failures(), 1);
    assert!(summary
        .lines()
        .last()
        .is_some_and(|l| l.ends_with("load: duplicate rule id `UI-NO-FIRESTORE`")));
}

// ── Scanner ──

#[test]
fn scanner_reports_located_violations_in_project() {
    let rules = load_rule_set(&[
        rule_file("data-no-http.rule.yaml"),
        rule_file("arch-ignore.rule.yaml"),
    ])
    .expect("fixtures load");

    let scanner = Scanner::builder()
        .root(fixtures().join("project"))
        .rules(rules)
        .build()
        .expect("scanner builds");
    let no_paths: &[&Path] = &[];
    let result = scanner.scan_paths(no_paths).expect("scan succeeds");

    assert_eq!(result.files_checked, 4);
    let found: Vec<(String, &str, usize)> = result
        .violations
        .iter()
        .map(|v| {
            (
                v.location.file.display().to_string(),
                v.code.as_str(),
                v.location.line,
            )
        })
        .collect();
    assert_eq!(
        found,
        vec![
            ("lib/data/user_repository.dart".to_string(), "DATA-NO-HTTP", 1),
            ("lib/data/user_repository.dart".to_string(), "DATA-NO-HTTP", 5),
            ("lib/ui/profile.dart".to_string(), "UI-NO-FIRESTORE", 1),
        ]
    );
    assert!(result.has_errors());
}

#[test]
fn scanner_applies_config_overrides() {
    let rules = load_rule_set(&[rule_file("arch-ignore.rule.yaml")]).expect("fixture loads");
    let config = Config::parse(
        r#"
[rules.UI-NO-FIRESTORE]
severity = "info"
"#,
    )
    .expect("config parses");

    let scanner = Scanner::builder()
        .root(fixtures().join("project"))
        .rules(rules)
        .config(config)
        .build()
        .expect("scanner builds");
    let result = scanner.scan_files(&["lib/ui/profile.dart"]);

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Info);
    assert!(!result.has_errors());
}
