// src/inspect/mod.rs
//! Archive inspection: classifies how far a jar has moved toward JPMS.

pub mod descriptor;

use crate::error::{Result, ScoutError};
use crate::status::ModuleName;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const DESCRIPTOR_SUFFIX: &str = "module-info.class";
const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
const AUTOMATIC_MODULE_ATTRIBUTE: &str = "Automatic-Module-Name";

/// An open jar-like archive.
pub struct JarArchive {
    archive: ZipArchive<File>,
    path: PathBuf,
}

impl JarArchive {
    /// Opens a jar archive for inspection.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a zip container.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ScoutError::io(e, path))?;
        let archive = ZipArchive::new(file).map_err(|e| ScoutError::Archive {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            archive,
            path: path.to_path_buf(),
        })
    }

    /// Cheap structural probe: does this file open as a zip container?
    /// Failure to open is evidence for a NotArchive classification, never an
    /// error.
    #[must_use]
    pub fn probe(path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        match File::open(path) {
            Ok(file) => ZipArchive::new(file).is_ok(),
            Err(_) => false,
        }
    }

    /// Extracts the archive's module name, if any.
    ///
    /// A genuine `module-info.class` descriptor wins; multi-release jars may
    /// carry one per version overlay directory, in which case the
    /// lexicographically greatest entry name (the highest overlay) is read.
    /// Without a descriptor, the manifest's `Automatic-Module-Name`
    /// attribute is consulted. A missing manifest is not an error; broken
    /// jars without one exist in the wild.
    ///
    /// # Errors
    ///
    /// Fails on unreadable entries or a corrupt descriptor.
    pub fn module_name(&mut self) -> Result<Option<ModuleName>> {
        if let Some(entry) = self.descriptor_entry() {
            let name = self.read_descriptor(&entry)?;
            return Ok(Some(ModuleName::descriptor(name)));
        }

        let Some(manifest) = self.read_manifest()? else {
            return Ok(None);
        };
        Ok(main_attribute(&manifest, AUTOMATIC_MODULE_ATTRIBUTE).map(ModuleName::automatic))
    }

    fn descriptor_entry(&self) -> Option<String> {
        self.archive
            .file_names()
            .filter(|name| name.ends_with(DESCRIPTOR_SUFFIX))
            .max()
            .map(ToString::to_string)
    }

    fn read_descriptor(&mut self, entry: &str) -> Result<String> {
        let path = self.path.clone();
        let file = self
            .archive
            .by_name(entry)
            .map_err(|e| archive_error(&path, e))?;
        descriptor::module_name(file)
    }

    fn read_manifest(&mut self) -> Result<Option<String>> {
        let path = self.path.clone();
        let mut file = match self.archive.by_name(MANIFEST_ENTRY) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(archive_error(&path, e)),
        };
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| ScoutError::io(e, &path))?;
        Ok(Some(text))
    }
}

fn archive_error(path: &Path, e: zip::result::ZipError) -> ScoutError {
    ScoutError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Looks up a main-section manifest attribute, case-insensitively, with
/// 72-byte continuation lines unfolded.
fn main_attribute(manifest: &str, attribute: &str) -> Option<String> {
    let mut unfolded: Vec<String> = Vec::new();
    for line in manifest.lines() {
        if line.is_empty() {
            // end of the main section
            break;
        }
        if let Some(rest) = line.strip_prefix(' ') {
            if let Some(last) = unfolded.last_mut() {
                last.push_str(rest);
            }
            continue;
        }
        unfolded.push(line.to_string());
    }

    unfolded.iter().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case(attribute) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_attribute_simple() {
        let manifest = "Manifest-Version: 1.0\r\nAutomatic-Module-Name: example.auto\r\n\r\n";
        assert_eq!(
            main_attribute(manifest, AUTOMATIC_MODULE_ATTRIBUTE),
            Some("example.auto".to_string())
        );
    }

    #[test]
    fn test_main_attribute_case_insensitive() {
        let manifest = "automatic-module-name: example.auto\n";
        assert_eq!(
            main_attribute(manifest, AUTOMATIC_MODULE_ATTRIBUTE),
            Some("example.auto".to_string())
        );
    }

    #[test]
    fn test_main_attribute_continuation_line() {
        let manifest =
            "Manifest-Version: 1.0\nAutomatic-Module-Name: com.example.a.very.lo\n ng.module.name\n";
        assert_eq!(
            main_attribute(manifest, AUTOMATIC_MODULE_ATTRIBUTE),
            Some("com.example.a.very.long.module.name".to_string())
        );
    }

    #[test]
    fn test_main_attribute_stops_at_section_end() {
        let manifest = "Manifest-Version: 1.0\n\nName: foo/\nAutomatic-Module-Name: hidden\n";
        assert_eq!(main_attribute(manifest, AUTOMATIC_MODULE_ATTRIBUTE), None);
    }

    #[test]
    fn test_main_attribute_absent() {
        assert_eq!(
            main_attribute("Manifest-Version: 1.0\n", AUTOMATIC_MODULE_ATTRIBUTE),
            None
        );
    }
}
