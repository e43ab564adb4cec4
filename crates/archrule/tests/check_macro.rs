//! Integration tests for the `archrule::check_rules!()` macro.

// Rule files shipped with these tests.
mod local {
    archrule::check_rules!("crates/archrule/tests/rules/*.rule.yaml");
}

// The built-in rule catalogue carries its own fixtures.
mod builtin {
    archrule::check_rules!(
        "crates/archrule-rules/rules/*.rule.yaml",
        "crates/archrule-core/tests/fixtures/rules/layers.rules.json",
    );
}

#[test]
#[should_panic(expected = "FAILED: 1 test(s)")]
fn failing_fixture_panics_with_report() {
    archrule::__internal::run_fixture_check(&[
        "crates/archrule-core/tests/fixtures/rules/broken-fixture.rule.yaml",
    ]);
}

// No patterns: the `[check] rules` list of the root archrule.toml.
mod configured {
    archrule::check_rules!();
}
