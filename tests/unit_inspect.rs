// tests/unit_inspect.rs
//! Archive inspection against synthetic jars.

mod common;

use common::{automatic_manifest, module_info, plain_manifest, write_jar};
use modscout_core::inspect::JarArchive;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_descriptor_wins() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("modular.jar");
    write_jar(
        &jar,
        &[
            ("META-INF/MANIFEST.MF", &automatic_manifest("ignored.name")),
            ("module-info.class", &module_info("example.module")),
        ],
    );

    let name = JarArchive::open(&jar).unwrap().module_name().unwrap().unwrap();
    assert_eq!(name.name(), "example.module");
    assert!(!name.is_automatic());
}

#[test]
fn test_highest_descriptor_entry_wins() {
    // Multi-release jars may carry several descriptors; the
    // lexicographically greatest entry name is authoritative.
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("multirelease.jar");
    write_jar(
        &jar,
        &[
            (
                "META-INF/versions/9/module-info.class",
                &module_info("example.overlay"),
            ),
            ("module-info.class", &module_info("example.root")),
        ],
    );

    let name = JarArchive::open(&jar).unwrap().module_name().unwrap().unwrap();
    assert_eq!(name.name(), "example.root");
}

#[test]
fn test_automatic_module_name_fallback() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("automatic.jar");
    write_jar(
        &jar,
        &[("META-INF/MANIFEST.MF", &automatic_manifest("example.auto"))],
    );

    let name = JarArchive::open(&jar).unwrap().module_name().unwrap().unwrap();
    assert_eq!(name.name(), "example.auto");
    assert!(name.is_automatic());
}

#[test]
fn test_plain_jar_has_no_module_name() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("plain.jar");
    write_jar(
        &jar,
        &[
            ("META-INF/MANIFEST.MF", &plain_manifest()),
            ("com/example/Main.class", b"\x00"),
        ],
    );

    assert!(JarArchive::open(&jar).unwrap().module_name().unwrap().is_none());
}

#[test]
fn test_missing_manifest_is_not_an_error() {
    // Broken jars without any manifest exist on Maven Central
    // (javax.inject:javax.inject:1 among them).
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("broken.jar");
    write_jar(&jar, &[("com/example/Main.class", b"\x00")]);

    assert!(JarArchive::open(&jar).unwrap().module_name().unwrap().is_none());
}

#[test]
fn test_probe_rejects_non_archive() {
    let dir = TempDir::new().unwrap();
    let fake = dir.path().join("fake.jar");
    fs::write(&fake, "this is not a zip file").unwrap();

    assert!(!JarArchive::probe(&fake));
    assert!(JarArchive::open(&fake).is_err());
}

#[test]
fn test_probe_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(!JarArchive::probe(&dir.path().join("absent.jar")));
}

#[test]
fn test_inspection_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("modular.jar");
    write_jar(&jar, &[("module-info.class", &module_info("example.module"))]);

    let first = JarArchive::open(&jar).unwrap().module_name().unwrap();
    let second = JarArchive::open(&jar).unwrap().module_name().unwrap();
    assert_eq!(first, second);
}
