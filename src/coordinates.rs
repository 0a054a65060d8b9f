// src/coordinates.rs
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One dependency coordinate in the graph.
///
/// Identity and ordering cover (group, artifact, version, type, classifier).
/// The scope is auxiliary metadata: two resolutions of the same coordinate in
/// different scopes collapse into one vertex, first-seen scope wins.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyNode {
    group: String,
    artifact: String,
    version: String,
    classifier: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    scope: String,
}

impl DependencyNode {
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
        kind: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier,
            kind: kind.into(),
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// The artifact type/extension ("jar", "pom", ...).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Formats the node as `group:artifact:version[:classifier]:type`.
    #[must_use]
    pub fn to_terse_string(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push_str(&self.group);
        out.push(':');
        out.push_str(&self.artifact);
        out.push(':');
        out.push_str(&self.version);
        out.push(':');
        if let Some(classifier) = &self.classifier {
            out.push_str(classifier);
            out.push(':');
        }
        out.push_str(&self.kind);
        out
    }

    fn identity(&self) -> (&str, &str, &str, &str, Option<&str>) {
        (
            &self.group,
            &self.artifact,
            &self.version,
            &self.kind,
            self.classifier.as_deref(),
        )
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_terse_string())
    }
}

// Scope is deliberately left out of equality, ordering and hashing.
impl PartialEq for DependencyNode {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for DependencyNode {}

impl Hash for DependencyNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for DependencyNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DependencyNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // (group, artifact, version, type), classifier only as a tiebreaker
        // so that the ordering stays consistent with equality.
        self.identity().cmp(&other.identity())
    }
}
