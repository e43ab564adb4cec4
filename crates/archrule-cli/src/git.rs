//! Staged-file discovery through the `git` executable.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Returns the top-level directory of the repository containing `dir`.
pub fn repo_root(dir: &Path) -> Result<PathBuf> {
    let out = git(dir, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(out.trim()))
}

/// Lists files staged for commit (added, copied or modified), relative to
/// the repository root.
pub fn staged_files(root: &Path) -> Result<Vec<PathBuf>> {
    let out = git(
        root,
        &["diff", "--cached", "--name-only", "--diff-filter=ACM"],
    )?;
    Ok(parse_name_list(&out))
}

fn parse_name_list(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_list_skips_blank_lines() {
        let files = parse_name_list("lib/a.dart\n\nlib/ui/b.dart\n");
        assert_eq!(
            files,
            vec![PathBuf::from("lib/a.dart"), PathBuf::from("lib/ui/b.dart")]
        );
        assert!(parse_name_list("\n").is_empty());
    }
}
