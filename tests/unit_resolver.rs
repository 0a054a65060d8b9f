// tests/unit_resolver.rs
//! Local repository resolution.

mod common;

use common::install_artifact;
use modscout_core::coordinates::DependencyNode;
use modscout_core::error::ScoutError;
use modscout_core::resolver::{DependencyResolver, RepositoryResolver};
use std::fs;
use tempfile::TempDir;

fn node(version: &str) -> DependencyNode {
    DependencyNode::new("com.example", "lib", version, None, "jar", "compile")
}

#[test]
fn test_resolves_current_and_highest() {
    let repo = TempDir::new().unwrap();
    let current = install_artifact(repo.path(), "com.example", "lib", "1.0.0", b"old");
    let highest = install_artifact(repo.path(), "com.example", "lib", "2.0.0", b"new");

    let resolver = RepositoryResolver::new(repo.path());
    let resolved = resolver.resolve(&node("1.0.0")).unwrap();

    assert_eq!(resolved.source_file, current);
    assert_eq!(resolved.highest_version, "2.0.0");
    assert_eq!(resolved.highest_file, highest);
}

#[test]
fn test_versions_sorted_by_maven_precedence() {
    let repo = TempDir::new().unwrap();
    install_artifact(repo.path(), "com.example", "lib", "2.9.0", b"a");
    install_artifact(repo.path(), "com.example", "lib", "2.10.0", b"b");
    install_artifact(repo.path(), "com.example", "lib", "3.0.0-SNAPSHOT", b"c");

    let resolver = RepositoryResolver::new(repo.path());
    let versions = resolver.published_versions(&node("2.9.0")).unwrap();
    assert_eq!(versions, vec!["2.9.0", "2.10.0", "3.0.0-SNAPSHOT"]);

    // 2.10.0 is a lexicographic trap; precedence picks the snapshot last
    let resolved = resolver.resolve(&node("2.9.0")).unwrap();
    assert_eq!(resolved.highest_version, "3.0.0-SNAPSHOT");
}

#[test]
fn test_unknown_artifact_fails() {
    let repo = TempDir::new().unwrap();
    let resolver = RepositoryResolver::new(repo.path());
    assert!(resolver.resolve(&node("1.0.0")).is_err());
}

#[test]
fn test_no_versions_published() {
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("com/example/lib")).unwrap();

    let resolver = RepositoryResolver::new(repo.path());
    let result = resolver.resolve(&node("1.0.0"));
    assert!(matches!(result, Err(ScoutError::NoVersions { .. })));
}

#[test]
fn test_missing_artifact_file_fails() {
    let repo = TempDir::new().unwrap();
    // version directory exists but the jar itself is gone
    fs::create_dir_all(repo.path().join("com/example/lib/1.0.0")).unwrap();

    let resolver = RepositoryResolver::new(repo.path());
    let result = resolver.resolve(&node("1.0.0"));
    assert!(matches!(result, Err(ScoutError::ArtifactMissing { .. })));
}

#[test]
fn test_classifier_in_file_name() {
    let repo = TempDir::new().unwrap();
    let dir = repo.path().join("com/example/lib/1.0.0");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("lib-1.0.0-linux.jar"), b"bits").unwrap();

    let classified = DependencyNode::new(
        "com.example",
        "lib",
        "1.0.0",
        Some("linux".to_string()),
        "jar",
        "compile",
    );
    let resolver = RepositoryResolver::new(repo.path());
    let resolved = resolver.resolve(&classified).unwrap();
    assert!(resolved
        .source_file
        .ends_with("com/example/lib/1.0.0/lib-1.0.0-linux.jar"));
}
