//! Error types for the weighted graph library.

use thiserror::Error;

/// All errors that can occur in the weighted graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge or query referenced a label that is not in the graph.
    #[error("Node '{0}' not found")]
    MissingNode(String),

    /// The spanning tree could not grow to cover every node.
    #[error("Graph is disconnected: spanning tree reached {reached} of {total} nodes")]
    UnreachableComponent { reached: usize, total: usize },

    /// The operation needs at least one node.
    #[error("Graph has no nodes")]
    EmptyGraph,

    /// Self-edge not allowed.
    #[error("Self-loop not allowed on node '{0}'")]
    SelfLoop(String),

    /// The two nodes are already connected.
    #[error("Edge between '{from}' and '{to}' already exists")]
    DuplicateEdge { from: String, to: String },

    /// An edge given on the command line could not be parsed.
    #[error("Invalid edge '{0}': expected FROM:TO:WEIGHT")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
