//! Architecture contract tests.

mod support;

use support::architecture::{exists, lines_mentioning, mod_rs_logic, read, undeclared_modules};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = lines_mentioning(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = lines_mentioning(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "good_lp::",
            "csv::",
            "clap::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = mod_rs_logic("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> &'static dyn OperatorPort"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = lines_mentioning("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = lines_mentioning("src/application", &["crate::adapter::"]);
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn solver_backends_stay_behind_the_port() {
    let hits = lines_mentioning("src/application", &["good_lp::", "highs::"]);
    assert!(
        hits.is_empty(),
        "application layer should only see the Solver port: {hits:#?}"
    );
}

#[test]
fn config_template_ships_with_the_crate() {
    assert!(
        exists("config.toml.example"),
        "`config init` embeds config.toml.example"
    );
}

#[test]
fn every_source_file_is_reachable_from_the_crate_root() {
    let orphans = undeclared_modules();
    assert!(
        orphans.is_empty(),
        "source files with no `mod` declaration in their parent: {orphans:#?}"
    );
}
