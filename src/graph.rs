// src/graph.rs
//! Directed acyclic graph over dependency coordinates.

use crate::coordinates::DependencyNode;
use crate::error::{Result, ScoutError};
use crate::tree::TreeNode;
use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// A DAG of dependency coordinates with parent -> child ownership edges.
///
/// Vertex insertion is idempotent per coordinate: inserting an already-known
/// coordinate returns the existing vertex and leaves its edge set intact.
/// Edge insertion rejects anything that would introduce a cycle, which the
/// supplied dependency tree must never do.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<DependencyNode, ()>,
    indices: HashMap<DependencyNode, NodeIndex>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an externally supplied dependency tree by
    /// depth-first traversal from the root.
    pub fn from_tree(root: &TreeNode) -> Result<Self> {
        let mut graph = Self::new();
        graph.insert_subtree(root)?;
        Ok(graph)
    }

    fn insert_subtree(&mut self, node: &TreeNode) -> Result<()> {
        let current = node.coordinate();
        self.add_vertex(current.clone());
        for child in &node.children {
            let child_current = child.coordinate();
            self.add_vertex(child_current.clone());
            self.add_edge(&current, &child_current)?;
            self.insert_subtree(child)?;
        }
        Ok(())
    }

    /// Inserts a vertex, returning the existing one for a known coordinate.
    pub fn add_vertex(&mut self, node: DependencyNode) -> NodeIndex {
        if let Some(index) = self.indices.get(&node) {
            return *index;
        }
        let index = self.graph.add_node(node.clone());
        self.indices.insert(node, index);
        index
    }

    /// Inserts a directed edge `from -> to`. Both endpoints are inserted if
    /// absent. Duplicate parallel edges are idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::GraphCycle`] if the edge would close a cycle,
    /// which indicates a contract violation by the supplied tree.
    pub fn add_edge(&mut self, from: &DependencyNode, to: &DependencyNode) -> Result<()> {
        let source = self.add_vertex(from.clone());
        let target = self.add_vertex(to.clone());

        if self.graph.find_edge(source, target).is_some() {
            return Ok(());
        }
        if source == target || has_path_connecting(&self.graph, target, source, None) {
            return Err(ScoutError::GraphCycle {
                from: from.to_terse_string(),
                to: to.to_terse_string(),
            });
        }

        self.graph.add_edge(source, target, ());
        Ok(())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn contains(&self, node: &DependencyNode) -> bool {
        self.indices.contains_key(node)
    }

    /// The unique vertex with in-degree zero. The supplied tree guarantees
    /// exactly one such vertex, the project itself.
    #[must_use]
    pub fn root(&self) -> Option<&DependencyNode> {
        self.graph
            .node_indices()
            .find(|ix| {
                self.graph
                    .neighbors_directed(*ix, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|ix| &self.graph[ix])
    }

    /// Direct dependencies (out-edges) of the given vertex.
    #[must_use]
    pub fn dependencies_of(&self, node: &DependencyNode) -> Vec<&DependencyNode> {
        let Some(index) = self.indices.get(node) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(*index, Direction::Outgoing)
            .map(|ix| &self.graph[ix])
            .collect()
    }

    /// Vertices in topological order: every edge source precedes its target,
    /// so the root comes first.
    #[must_use]
    pub fn topological_order(&self) -> Vec<&DependencyNode> {
        match toposort(&self.graph, None) {
            Ok(order) => order.into_iter().map(|ix| &self.graph[ix]).collect(),
            // Edge insertion rejects cycles, so the sort cannot fail.
            Err(_) => unreachable!("graph invariant violated: cycle in DAG"),
        }
    }

    /// Vertices in dependency order: all of a vertex's dependencies precede
    /// it, so leaf dependencies come first. This is the walk order of the
    /// report and every renderer.
    #[must_use]
    pub fn dependency_order(&self) -> Vec<&DependencyNode> {
        let mut order = self.topological_order();
        order.reverse();
        order
    }
}
