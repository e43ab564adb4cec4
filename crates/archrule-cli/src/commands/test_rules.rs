//! Test command: runs the embedded fixtures of rule files.

use archrule_core::rule::load_rule_file;
use archrule_core::FixtureRunner;
use std::path::Path;

use super::{expand_rule_arg, print_diagnostic};

/// Runs the test command. Returns `true` when every case passed.
pub fn run(args: &[String]) -> bool {
    let mut runner = FixtureRunner::new();

    for arg in args {
        match expand_rule_arg(arg) {
            Ok(paths) => {
                for path in paths {
                    run_file(&mut runner, &path);
                }
            }
            Err(e) => runner.load_failed(arg, format!("invalid glob pattern: {e}")),
        }
    }

    let summary = runner.finish();
    for line in summary.lines() {
        println!("{line}");
    }
    println!("\n{}", summary.summary_line());

    summary.is_success()
}

fn run_file(runner: &mut FixtureRunner, path: &Path) {
    let label = path.display().to_string();
    match load_rule_file(path) {
        Ok(rules) => runner.run_rules(&label, rules),
        Err(err) => {
            runner.load_failed(&label, err.cause());
            print_diagnostic(err);
        }
    }
}
