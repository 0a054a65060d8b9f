// src/report.rs
//! Walks the dependency graph, resolves and inspects every node, and
//! assembles the final report.

use crate::coordinates::DependencyNode;
use crate::graph::DependencyGraph;
use crate::inspect::JarArchive;
use crate::resolver::{DependencyResolver, ResolvedDependency};
use crate::status::{ModularizationStatus, ModuleName};
use log::{debug, error};
use std::collections::BTreeMap;
use std::path::Path;

/// The per-node outcome of resolution and inspection.
#[derive(Debug, Clone)]
pub enum ReportEntry {
    /// Resolution succeeded; both sides carry a classification.
    Ok {
        node: DependencyNode,
        current: ModularizationStatus,
        highest: ModularizationStatus,
    },
    /// Resolution itself failed. Inspection never ran.
    Error { node: DependencyNode, error: String },
}

impl ReportEntry {
    #[must_use]
    pub fn node(&self) -> &DependencyNode {
        match self {
            ReportEntry::Ok { node, .. } | ReportEntry::Error { node, .. } => node,
        }
    }

    /// Module name of the currently pinned artifact, when modularized.
    #[must_use]
    pub fn current_module(&self) -> Option<&ModuleName> {
        match self {
            ReportEntry::Ok { current, .. } => current.module(),
            ReportEntry::Error { .. } => None,
        }
    }

    /// Module name at the highest published version, when modularized.
    #[must_use]
    pub fn highest_module(&self) -> Option<&ModuleName> {
        match self {
            ReportEntry::Ok { highest, .. } => highest.module(),
            ReportEntry::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn highest_version(&self) -> Option<&str> {
        match self {
            ReportEntry::Ok { highest, .. } => highest.version(),
            ReportEntry::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn current_status(&self) -> Option<&ModularizationStatus> {
        match self {
            ReportEntry::Ok { current, .. } => Some(current),
            ReportEntry::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn highest_status(&self) -> Option<&ModularizationStatus> {
        match self {
            ReportEntry::Ok { highest, .. } => Some(highest),
            ReportEntry::Error { .. } => None,
        }
    }

    /// The resolution failure, for error entries.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            ReportEntry::Ok { .. } => None,
            ReportEntry::Error { error, .. } => Some(error),
        }
    }
}

/// The finished audit: the graph plus one entry per vertex and derived
/// counters. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Report {
    graph: DependencyGraph,
    entries: BTreeMap<DependencyNode, ReportEntry>,
}

impl Report {
    #[must_use]
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    #[must_use]
    pub fn entries(&self) -> &BTreeMap<DependencyNode, ReportEntry> {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, node: &DependencyNode) -> Option<&ReportEntry> {
        self.entries.get(node)
    }

    #[must_use]
    pub fn dependencies_total(&self) -> usize {
        self.entries.len()
    }

    /// Dependencies whose HIGHEST release declares a real module descriptor.
    /// Counters look at the highest version because that is the best
    /// achievable future state.
    #[must_use]
    pub fn dependencies_fully_modularized(&self) -> usize {
        self.count_highest(|status| {
            matches!(status, ModularizationStatus::FullyModularized { .. })
        })
    }

    /// Dependencies whose highest release only names an automatic module.
    #[must_use]
    pub fn dependencies_named(&self) -> usize {
        self.count_highest(|status| {
            matches!(status, ModularizationStatus::AutomaticModuleName { .. })
        })
    }

    /// Dependencies whose highest release is a plain unmodularized archive.
    #[must_use]
    pub fn dependencies_not_modularized(&self) -> usize {
        self.count_highest(|status| matches!(status, ModularizationStatus::NotModularized { .. }))
    }

    fn count_highest(&self, predicate: impl Fn(&ModularizationStatus) -> bool) -> usize {
        self.entries
            .values()
            .filter(|entry| match entry {
                ReportEntry::Ok { highest, .. } => predicate(highest),
                ReportEntry::Error { .. } => false,
            })
            .count()
    }
}

/// Resolves and inspects every vertex of the graph, in dependency order,
/// and assembles the report.
///
/// A single node's failure never aborts the run: resolution errors become
/// [`ReportEntry::Error`], inspection errors degrade the affected side to
/// [`ModularizationStatus::Unavailable`]. Every vertex receives exactly one
/// entry.
#[must_use]
pub fn build_report<R: DependencyResolver>(resolver: &R, graph: &DependencyGraph) -> Report {
    let mut entries = BTreeMap::new();

    for node in graph.dependency_order() {
        debug!("node: {}", node.to_terse_string());

        let entry = match resolver.resolve(node) {
            Ok(resolved) => entry_of_resolved(node, &resolved),
            Err(e) => {
                error!("error resolving {}: {e}", node.to_terse_string());
                ReportEntry::Error {
                    node: node.clone(),
                    error: e.to_string(),
                }
            }
        };
        entries.insert(node.clone(), entry);
    }

    Report {
        graph: graph.clone(),
        entries,
    }
}

fn entry_of_resolved(node: &DependencyNode, resolved: &ResolvedDependency) -> ReportEntry {
    debug!("current file:    {}", resolved.source_file.display());
    debug!("current version: {}", node.version());
    debug!("highest file:    {}", resolved.highest_file.display());
    debug!("highest version: {}", resolved.highest_version);

    ReportEntry::Ok {
        node: node.clone(),
        current: determine_status(&resolved.source_file, node.version()),
        highest: determine_status(&resolved.highest_file, &resolved.highest_version),
    }
}

/// Classifies one resolved artifact file.
fn determine_status(file: &Path, version: &str) -> ModularizationStatus {
    if !JarArchive::probe(file) {
        return ModularizationStatus::NotArchive {
            version: version.to_string(),
        };
    }

    let inspection = JarArchive::open(file).and_then(|mut jar| jar.module_name());
    match inspection {
        Ok(Some(module)) if module.is_automatic() => ModularizationStatus::AutomaticModuleName {
            module,
            version: version.to_string(),
        },
        Ok(Some(module)) => ModularizationStatus::FullyModularized {
            module,
            version: version.to_string(),
        },
        Ok(None) => ModularizationStatus::NotModularized {
            version: version.to_string(),
        },
        Err(e) => {
            error!("error inspecting {}: {e}", file.display());
            ModularizationStatus::Unavailable {
                error: Some(e.to_string()),
            }
        }
    }
}
