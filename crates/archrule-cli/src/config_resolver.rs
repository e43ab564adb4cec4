//! Locating the `archrule.toml` that applies to a run.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `archrule.toml` or `.archrule.toml` in the working directory, then in
//!    each parent up to the enclosing git repository root (only the working
//!    directory itself outside a repository)
//! 3. `config.toml` in `$ARCHRULE_CONFIG_DIR`, else in `~/.archrule/`
//!
//! Without a hit the built-in defaults apply.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::git;

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project tree.
    Project(PathBuf),
    /// User-wide fallback.
    Global(PathBuf),
    /// Nothing found; defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the config file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Directory that relative `[check] rules` patterns are resolved against.
    ///
    /// `None` for the global config, whose patterns stay relative to the
    /// working directory.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => p.parent(),
            Self::Global(_) | Self::Default => None,
        }
    }

    /// Returns `true` for the user-wide fallback.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// File names recognised in the project tree, in order of preference.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["archrule.toml", ".archrule.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Directories searched for a configuration file.
#[derive(Debug, Clone)]
struct SearchPath {
    /// Directory the walk starts in.
    start: PathBuf,
    /// Last directory walked; an ancestor of `start` or `start` itself.
    stop: PathBuf,
    /// User-wide configuration directory.
    global: Option<PathBuf>,
}

impl SearchPath {
    fn find(&self, explicit: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        for dir in self.start.ancestors() {
            let found = PROJECT_CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file());
            if let Some(path) = found {
                debug!("Found project config: {}", path.display());
                return ConfigSource::Project(path);
            }
            if dir == self.stop {
                break;
            }
        }

        match &self.global {
            Some(dir) if dir.join(GLOBAL_CONFIG_NAME).is_file() => {
                let path = dir.join(GLOBAL_CONFIG_NAME);
                debug!("Found global config: {}", path.display());
                ConfigSource::Global(path)
            }
            _ => ConfigSource::Default,
        }
    }
}

/// Resolves the configuration for a run started in `dir`.
#[must_use]
pub fn resolve(dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let stop = git::repo_root(&start).unwrap_or_else(|_| start.clone());
    SearchPath {
        start,
        stop,
        global: global_config_dir(),
    }
    .find(explicit)
}

/// Returns the user-wide configuration directory:
/// `$ARCHRULE_CONFIG_DIR`, else `~/.archrule/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ARCHRULE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".archrule"))
}
