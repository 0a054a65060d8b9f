// src/resolver.rs
//! Coordinate resolution: locate the pinned artifact and the highest
//! published release for a graph node.

use crate::coordinates::DependencyNode;
use crate::error::{Result, ScoutError};
use crate::version;
use std::fs;
use std::path::PathBuf;

/// The result of resolving one graph node.
#[derive(Debug, Clone)]
pub struct ResolvedDependency {
    pub source: DependencyNode,
    /// Artifact file for the currently pinned version.
    pub source_file: PathBuf,
    /// Highest published version of the artifact.
    pub highest_version: String,
    /// Artifact file for the highest published version.
    pub highest_file: PathBuf,
}

/// Capability the report builder needs from the surrounding build tooling:
/// given a node, materialize both the pinned and the highest-released
/// artifact as local files.
pub trait DependencyResolver {
    /// Resolves both sides for one node.
    ///
    /// # Errors
    ///
    /// Fails when no versions are published or either artifact cannot be
    /// materialized. The report builder recovers per node.
    fn resolve(&self, node: &DependencyNode) -> Result<ResolvedDependency>;
}

/// Resolver over a local Maven-layout repository
/// (`root/group/as/dirs/artifact/version/artifact-version[-classifier].type`).
///
/// Version listing enumerates the artifact's version directories and sorts
/// them by Maven precedence; nothing is fetched over the network.
#[derive(Debug, Clone)]
pub struct RepositoryResolver {
    root: PathBuf,
}

impl RepositoryResolver {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn artifact_dir(&self, node: &DependencyNode) -> PathBuf {
        let mut dir = self.root.clone();
        for part in node.group().split('.') {
            dir.push(part);
        }
        dir.push(node.artifact());
        dir
    }

    fn artifact_file(&self, node: &DependencyNode, version: &str) -> PathBuf {
        let mut name = format!("{}-{version}", node.artifact());
        if let Some(classifier) = node.classifier() {
            name.push('-');
            name.push_str(classifier);
        }
        name.push('.');
        name.push_str(node.kind());
        self.artifact_dir(node).join(version).join(name)
    }

    /// All published versions of the node's (group, artifact) pair, sorted
    /// ascending by Maven precedence.
    pub fn published_versions(&self, node: &DependencyNode) -> Result<Vec<String>> {
        let dir = self.artifact_dir(node);
        let entries = fs::read_dir(&dir).map_err(|e| ScoutError::io(e, &dir))?;

        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ScoutError::io(e, &dir))?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    versions.push(name.to_string());
                }
            }
        }
        version::sort(&mut versions);
        Ok(versions)
    }

    fn materialize(&self, node: &DependencyNode, version: &str) -> Result<PathBuf> {
        let file = self.artifact_file(node, version);
        if !file.is_file() {
            return Err(ScoutError::ArtifactMissing { path: file });
        }
        Ok(file)
    }
}

impl DependencyResolver for RepositoryResolver {
    fn resolve(&self, node: &DependencyNode) -> Result<ResolvedDependency> {
        log::debug!("resolve: {}", node.to_terse_string());

        let versions = self.published_versions(node)?;
        let Some(highest) = versions.last() else {
            return Err(ScoutError::NoVersions {
                coordinate: node.to_terse_string(),
            });
        };

        let source_file = self.materialize(node, node.version())?;
        let highest_file = self.materialize(node, highest)?;

        Ok(ResolvedDependency {
            source: node.clone(),
            source_file,
            highest_version: highest.clone(),
            highest_file,
        })
    }
}
