// tests/integration_render.rs
//! Renderer output over a real end-to-end report.

mod common;

use common::{install_jar, module_info, plain_manifest};
use modscout_core::graph::DependencyGraph;
use modscout_core::render::{self, OutputFormat};
use modscout_core::report::build_report;
use modscout_core::resolver::RepositoryResolver;
use modscout_core::tree::TreeNode;
use tempfile::TempDir;

fn small_report() -> modscout_core::report::Report {
    let repo = TempDir::new().unwrap();
    install_jar(
        repo.path(),
        "com.example",
        "app",
        "1.0.0",
        &[("META-INF/MANIFEST.MF", &plain_manifest())],
    );
    install_jar(
        repo.path(),
        "com.example",
        "lib",
        "1.0.0",
        &[("module-info.class", &module_info("example.lib"))],
    );

    let tree: TreeNode = serde_json::from_str(
        r#"{"group": "com.example", "artifact": "app", "version": "1.0.0",
            "children": [
                {"group": "com.example", "artifact": "lib", "version": "1.0.0",
                 "scope": "compile", "children": []}
            ]}"#,
    )
    .unwrap();
    let graph = DependencyGraph::from_tree(&tree).unwrap();
    build_report(&RepositoryResolver::new(repo.path()), &graph)
}

#[test]
fn test_plain_output() {
    let report = small_report();
    let mut out = Vec::new();
    render::write_report(OutputFormat::Plain, &report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(
        "com.example:lib current version 1.0.0 is fully modularized as 'example.lib'"
    ));
    assert!(text.contains("com.example:app current version 1.0.0 is not modularized"));
}

#[test]
fn test_json_output() {
    let report = small_report();
    let mut out = Vec::new();
    render::write_report(OutputFormat::Json, &report, &mut out).unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["dependencies_total"], 2);
    assert_eq!(doc["dependencies_fully_modularized"], 1);
    assert_eq!(doc["dependencies_not_modularized"], 1);
    // leaves first
    assert_eq!(doc["dependencies"][0]["artifact"], "lib");
    assert_eq!(doc["dependencies"][1]["artifact"], "app");
}

#[test]
fn test_html_output() {
    let report = small_report();
    let mut out = Vec::new();
    render::write_report(OutputFormat::Html, &report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("<!DOCTYPE html>"));
    assert!(text.contains("<th>Fully modularized</th><td>1</td>"));
    assert!(text.contains("status-full"));
    assert!(text.contains("com.example:lib"));
}
