//! WeightedGraph — in-memory weighted, undirected graphs.
//!
//! Nodes are identified by label and joined by non-negative integer weights.
//! The graph answers shortest-path queries (Dijkstra), detects cycles, and
//! extracts minimum spanning trees (Prim).

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ShortestPath, ShortestPathTree};
pub use graph::{GraphBuilder, WeightedGraph};
pub use types::{Arc, Distance, Edge, GraphError, GraphResult, Node, NodeId, Weight};
