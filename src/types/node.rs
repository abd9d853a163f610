//! Graph nodes.

use super::EdgeId;

/// Index of a node in its graph's node arena.
pub type NodeId = usize;

/// A labelled vertex. Owns the ids of its incident edges, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique label within the graph.
    pub label: String,
    /// Incident edges.
    pub edges: Vec<EdgeId>,
}

impl Node {
    /// Create a node with no edges.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: Vec::new(),
        }
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
