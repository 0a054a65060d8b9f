// src/tree.rs
//! Externally supplied dependency tree, as produced by the build-tool
//! integration and materialized as JSON.

use crate::coordinates::DependencyNode;
use crate::error::{Result, ScoutError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Scope assumed when the build tool reports none.
pub const DEFAULT_SCOPE: &str = "compile";

/// One node of the resolved dependency tree handed to us by the build tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNode {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

fn default_kind() -> String {
    "jar".to_string()
}

impl TreeNode {
    /// Loads a dependency tree from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ScoutError::io(e, path))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Derives the coordinate for this tree node, defaulting a missing scope.
    #[must_use]
    pub fn coordinate(&self) -> DependencyNode {
        DependencyNode::new(
            &self.group,
            &self.artifact,
            &self.version,
            self.classifier.clone(),
            &self.kind,
            self.scope.as_deref().unwrap_or(DEFAULT_SCOPE),
        )
    }

    /// Prunes subtrees whose scope is not in the allow-list. An empty list
    /// keeps everything. The root is never pruned; filtering runs before
    /// graph construction so a coordinate cannot surface twice under two
    /// scopes.
    #[must_use]
    pub fn retain_scopes(mut self, scopes: &[String]) -> Self {
        if scopes.is_empty() {
            return self;
        }
        self.children = Self::filter_children(self.children, scopes);
        self
    }

    fn filter_children(children: Vec<TreeNode>, scopes: &[String]) -> Vec<TreeNode> {
        children
            .into_iter()
            .filter(|c| {
                let scope = c.scope.as_deref().unwrap_or(DEFAULT_SCOPE);
                scopes.iter().any(|s| s == scope)
            })
            .map(|mut c| {
                c.children = Self::filter_children(c.children, scopes);
                c
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TreeNode {
        serde_json::from_str(
            r#"{
                "group": "com.example", "artifact": "app", "version": "1.0.0",
                "children": [
                    {"group": "com.example", "artifact": "lib", "version": "2.0.0",
                     "scope": "compile", "children": []},
                    {"group": "junit", "artifact": "junit", "version": "4.13.2",
                     "scope": "test", "children": []}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_scope_defaults_to_compile() {
        let t = tree();
        assert_eq!(t.coordinate().scope(), "compile");
        assert_eq!(t.kind, "jar");
    }

    #[test]
    fn test_scope_filter_prunes_subtrees() {
        let t = tree().retain_scopes(&["compile".to_string()]);
        assert_eq!(t.children.len(), 1);
        assert_eq!(t.children[0].artifact, "lib");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let t = tree().retain_scopes(&[]);
        assert_eq!(t.children.len(), 2);
    }
}
