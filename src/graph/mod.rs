//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod describe;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use traversal::{connected_components, has_cycle};
pub use weighted_graph::WeightedGraph;
