//! List rules command implementation.

use anyhow::Result;
use archrule_core::{RuleDefinition, RuleSet};
use archrule_rules::{all_rules, Preset};

use crate::config_resolver::ConfigSource;

/// Runs the list-rules command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = super::load_config(source)?;

    println!("Built-in rules:\n");
    print_header();
    for rule in &all_rules()? {
        print_rule(rule, config.is_rule_enabled(rule.id().as_str()));
    }

    let configured = super::configured_rules(&config, RuleSet::default())?.rules;
    if !configured.is_empty() {
        println!("\nConfigured rules:\n");
        print_header();
        for rule in &configured {
            print_rule(rule, config.is_rule_enabled(rule.id().as_str()));
        }
    }

    println!("\nPresets:");
    for preset in [Preset::Recommended, Preset::Strict, Preset::Minimal] {
        println!("  {:<12} - {}", preset.name(), preset.rule_ids().join(", "));
    }
    println!("  {:<12} - configured rule files only", "none");

    println!("\nSelf-test rule files with:");
    println!("  archrule test \"rules/*.rule.yaml\"");

    Ok(())
}

fn print_header() {
    println!("{:<30} {:<9} Title", "Id", "Severity");
    println!("{}", "-".repeat(80));
}

fn print_rule(rule: &RuleDefinition, enabled: bool) {
    let marker = if enabled { "" } else { " (disabled)" };
    println!(
        "{:<30} {:<9} {}{marker}",
        rule.id().as_str(),
        rule.severity().to_string(),
        rule.title()
    );
}
