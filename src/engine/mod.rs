//! Weighted algorithms — shortest paths and spanning trees.

pub mod shortest_path;
pub mod spanning_tree;

pub use shortest_path::{shortest_path, shortest_paths, ShortestPath, ShortestPathTree};
pub use spanning_tree::minimum_spanning_tree;
