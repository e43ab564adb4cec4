//! Check command implementation.

use anyhow::{Context, Result};
use archrule_core::{Config, RuleSet, Scanner};

use super::ConfiguredRules;
use archrule_rules::Preset;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config_resolver::ConfigSource;
use crate::{git, OutputFormat};

/// Arguments of the check command.
pub struct CheckArgs {
    /// Files or directories to check.
    pub paths: Vec<PathBuf>,
    /// Check staged files instead of `paths`.
    pub staged: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Preset overriding the configured one.
    pub preset: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
}

/// Runs the check command. Returns `false` when violations at or above
/// `fail_on` were found or a configured rule file failed to load.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<bool> {
    let config = super::load_config(source)?;
    let fail_on = config.fail_on_severity()?;
    let loaded = collect_rules(&config, args.preset.as_deref())?;

    let staged = args.staged || args.paths.is_empty();
    let root = if staged {
        git::repo_root(Path::new("."))?
    } else {
        PathBuf::from(".")
    };

    let scanner = Scanner::builder()
        .root(root)
        .rules(loaded.rules)
        .config(config)
        .excludes(args.exclude.iter().cloned())
        .build()
        .context("Failed to build scanner")?;

    info!(
        "Checking {} with {} rules",
        if staged { "staged files" } else { "paths" },
        scanner.rules().len()
    );

    let result = if staged {
        let files = git::staged_files(scanner.root())?;
        if files.is_empty() {
            info!("No staged files to check");
        }
        scanner.scan_files(&files)
    } else {
        scanner
            .scan_paths(&args.paths)
            .context("Failed to discover files")?
    };

    super::output::print(&result, args.format)?;

    if !loaded.failed.is_empty() {
        warn!("{} rule file(s) failed to load", loaded.failed.len());
    }
    Ok(!result.has_violations_at(fail_on) && loaded.failed.is_empty())
}

/// Built-in preset rules plus the rule files configured under `[check]`.
fn collect_rules(config: &Config, preset_override: Option<&str>) -> Result<ConfiguredRules> {
    let name = preset_override
        .or(config.preset.as_deref())
        .unwrap_or("recommended");

    let preset_rules = if name == "none" {
        RuleSet::default()
    } else {
        let preset = Preset::parse(name).with_context(|| {
            format!("Unknown preset `{name}`. Valid presets: recommended, strict, minimal, none")
        })?;
        preset.rules()?
    };

    super::configured_rules(config, preset_rules)
}
