//! Edge types: the stored undirected record and its directed view.

use serde::Serialize;

use super::NodeId;

/// Index of an edge in its graph's edge arena.
pub type EdgeId = usize;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// An undirected connection between two nodes.
///
/// Stored once and referenced from both endpoints' adjacency lists, so the
/// `a -> b` and `b -> a` views always agree on the weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Endpoint that was named first when the edge was added.
    pub a: NodeId,
    /// Endpoint that was named second.
    pub b: NodeId,
    /// Cost of crossing the edge in either direction.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    /// The endpoint opposite `from`, or `None` if `from` is not an endpoint.
    pub fn other(&self, from: NodeId) -> Option<NodeId> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// True if the edge joins `x` and `y` in either orientation.
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// A directed view of an [`Edge`] as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arc<'g> {
    /// Label of the node the view is taken from.
    pub from: &'g str,
    /// Label of the opposite endpoint.
    pub to: &'g str,
    /// Weight of the underlying edge.
    pub weight: Weight,
}

impl std::fmt::Display for Arc<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
