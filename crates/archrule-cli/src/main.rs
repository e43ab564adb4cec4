//! archrule CLI tool.
//!
//! Usage:
//! ```bash
//! archrule test <RULE_FILES|GLOBS>...
//! archrule check [OPTIONS] [PATHS]...
//! archrule list-rules
//! archrule init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod git;

/// Declarative architecture rules: self-test rule files and check source trees
#[derive(Parser)]
#[command(name = "archrule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the embedded fixtures of rule files
    Test {
        /// Rule files or glob patterns (e.g. "rules/*.rule.yaml")
        #[arg(required = true)]
        rules: Vec<String>,
    },

    /// Check source files against the configured rules
    Check {
        /// Files or directories to check (default: staged files)
        paths: Vec<PathBuf>,

        /// Check the files staged in git
        #[arg(long)]
        staged: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Preset to use instead of the configured one
        #[arg(long)]
        preset: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());

    let passed = match cli.command {
        Commands::Test { rules } => commands::test_rules::run(&rules),
        Commands::Check {
            paths,
            staged,
            format,
            preset,
            exclude,
        } => commands::check::run(
            &commands::check::CheckArgs {
                paths,
                staged,
                format,
                preset,
                exclude,
            },
            &source,
        )?,
        Commands::ListRules => {
            commands::list_rules::run(&source)?;
            true
        }
        Commands::Init { force } => {
            commands::init::run(Path::new("."), force)?;
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
