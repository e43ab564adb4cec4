//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "archrule.toml";

const DEFAULT_CONFIG: &str = r#"# archrule configuration

# Built-in preset: recommended | strict | minimal | none
preset = "recommended"

# Lowest severity that fails `archrule check`: error | warning | info
fail_on = "error"

[check]
# File extensions to check
extensions = ["dart"]

# Extra rule files evaluated alongside the preset
# rules = ["rules/*.rule.yaml"]

# Glob patterns to exclude from scanning
exclude = [
    "**/build/**",
    "**/.dart_tool/**",
    "**/*.g.dart",
    "**/*.freezed.dart",
]

# Respect .gitignore files
respect_gitignore = true

# Per-rule overrides, keyed by rule id

# [rules.ARCH-REPO-STATELESS]
# enabled = false

# [rules.DART-I18N-NO-HARDCODED-TEXT]
# severity = "warning"
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: archrule check --staged");

    Ok(())
}
