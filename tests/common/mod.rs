// tests/common/mod.rs
//! Shared fixtures: synthetic jars and module descriptors.
#![allow(dead_code)]

use byteorder::{BigEndian, WriteBytesExt};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a jar containing the given (entry name, bytes) pairs.
pub fn write_jar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

/// A minimal valid `module-info.class` declaring `name`.
pub fn module_info(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.write_u32::<BigEndian>(0xCAFE_BABE).unwrap();
    out.write_u16::<BigEndian>(0).unwrap(); // minor
    out.write_u16::<BigEndian>(53).unwrap(); // major (Java 9)

    out.write_u16::<BigEndian>(6).unwrap(); // constant pool count
    out.push(1); // Utf8 "module-info"
    out.write_u16::<BigEndian>(11).unwrap();
    out.extend_from_slice(b"module-info");
    out.push(7); // Class #1
    out.write_u16::<BigEndian>(1).unwrap();
    out.push(1); // Utf8 "Module"
    out.write_u16::<BigEndian>(6).unwrap();
    out.extend_from_slice(b"Module");
    out.push(1); // Utf8 module name
    out.write_u16::<BigEndian>(u16::try_from(name.len()).unwrap())
        .unwrap();
    out.extend_from_slice(name.as_bytes());
    out.push(19); // Module #4
    out.write_u16::<BigEndian>(4).unwrap();

    out.write_u16::<BigEndian>(0x8000).unwrap(); // ACC_MODULE
    out.write_u16::<BigEndian>(2).unwrap(); // this_class
    out.write_u16::<BigEndian>(0).unwrap(); // super_class
    out.write_u16::<BigEndian>(0).unwrap(); // interfaces
    out.write_u16::<BigEndian>(0).unwrap(); // fields
    out.write_u16::<BigEndian>(0).unwrap(); // methods

    out.write_u16::<BigEndian>(1).unwrap(); // attribute count
    out.write_u16::<BigEndian>(3).unwrap(); // name: "Module"
    out.write_u32::<BigEndian>(16).unwrap(); // attribute length
    out.write_u16::<BigEndian>(5).unwrap(); // module_name_index
    out.write_u16::<BigEndian>(0).unwrap(); // module_flags
    out.write_u16::<BigEndian>(0).unwrap(); // module_version_index
    for _ in 0..5 {
        // requires, exports, opens, uses, provides counts
        out.write_u16::<BigEndian>(0).unwrap();
    }
    out
}

/// A manifest declaring an automatic module name.
pub fn automatic_manifest(name: &str) -> Vec<u8> {
    format!("Manifest-Version: 1.0\r\nAutomatic-Module-Name: {name}\r\n\r\n").into_bytes()
}

/// A manifest with no module-related attributes.
pub fn plain_manifest() -> Vec<u8> {
    b"Manifest-Version: 1.0\r\n\r\n".to_vec()
}

/// Installs an artifact file into a Maven-layout repository.
pub fn install_artifact(
    repo: &Path,
    group: &str,
    artifact: &str,
    version: &str,
    bytes: &[u8],
) -> PathBuf {
    let mut dir = repo.to_path_buf();
    for part in group.split('.') {
        dir.push(part);
    }
    dir.push(artifact);
    dir.push(version);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{artifact}-{version}.jar"));
    fs::write(&path, bytes).unwrap();
    path
}

/// Installs a jar with the given entries into a Maven-layout repository.
pub fn install_jar(
    repo: &Path,
    group: &str,
    artifact: &str,
    version: &str,
    entries: &[(&str, &[u8])],
) -> PathBuf {
    let mut dir = repo.to_path_buf();
    for part in group.split('.') {
        dir.push(part);
    }
    dir.push(artifact);
    dir.push(version);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{artifact}-{version}.jar"));
    write_jar(&path, entries);
    path
}
