//! Subcommand implementations and the helpers they share.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod test_rules;

use anyhow::{Context, Result};
use archrule_core::rule::load_rule_file;
use archrule_core::{Config, RuleFileError, RuleSet};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config_resolver::ConfigSource;

/// Loads the resolved configuration, or defaults when none was found.
///
/// Relative `[check] rules` patterns of a project or explicit config are
/// taken relative to the directory holding the config file.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        info!("Using global config: {}", path.display());
    }
    let mut config = Config::from_file(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    if let Some(base) = source.base_dir() {
        for pattern in &mut config.check.rules {
            if Path::new(pattern.as_str()).is_relative() {
                *pattern = base.join(pattern.as_str()).to_string_lossy().into_owned();
            }
        }
    }
    Ok(config)
}

fn is_glob(arg: &str) -> bool {
    arg.contains(|c| matches!(c, '*' | '?' | '['))
}

/// Expands a rule-file argument.
///
/// A plain path is returned as-is even if it does not exist, so that the
/// caller reports it as a load failure. A glob matching nothing is warned
/// about and yields no paths.
pub fn expand_rule_arg(arg: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    if !is_glob(arg) {
        return Ok(vec![PathBuf::from(arg)]);
    }

    let mut paths: Vec<PathBuf> = glob::glob(arg)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Cannot read {}: {}", e.path().display(), e.error());
                None
            }
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        warn!("No rule files match {arg}");
    }
    Ok(paths)
}

/// Prints a rule-file error as a source-annotated diagnostic on stderr.
pub fn print_diagnostic(err: RuleFileError) {
    eprintln!("{:?}", miette::Report::new(err));
}

/// Rules gathered from the `[check] rules` files.
#[derive(Debug, Default)]
pub struct ConfiguredRules {
    /// The starting rules plus those of every file that loaded.
    pub rules: RuleSet,
    /// Files that failed to load; none of their rules are kept.
    pub failed: Vec<PathBuf>,
}

/// Loads the extra rule files listed under `[check] rules` on top of `base`.
///
/// Each file stands alone: one that cannot be read, parsed or validated, or
/// that reuses an id already present, is reported as a diagnostic and left
/// out while the other files still load.
pub fn configured_rules(config: &Config, base: RuleSet) -> Result<ConfiguredRules> {
    let mut loaded = ConfiguredRules {
        rules: base,
        failed: Vec::new(),
    };

    for pattern in &config.check.rules {
        let files = expand_rule_arg(pattern)
            .with_context(|| format!("Invalid rule file pattern: {pattern}"))?;
        for file in files {
            let merged = load_rule_file(&file).and_then(|rules| {
                loaded
                    .rules
                    .merge(rules)
                    .map_err(|source| RuleFileError::Duplicate {
                        name: file.display().to_string(),
                        source,
                    })
            });
            if let Err(err) = merged {
                warn!("Skipping rule file {}", file.display());
                print_diagnostic(err);
                loaded.failed.push(file);
            }
        }
    }
    Ok(loaded)
}
