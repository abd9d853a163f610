//! Fluent API for building WeightedGraph instances.

use crate::types::{GraphResult, Weight};

use super::WeightedGraph;

/// Fluent builder for constructing a WeightedGraph.
///
/// Edges are validated when [`GraphBuilder::build`] runs, so nodes may be
/// declared after the edges that use them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String, Weight)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node.
    pub fn node(&mut self, label: &str) -> &mut Self {
        self.nodes.push(label.to_string());
        self
    }

    /// Declare several nodes at once.
    pub fn nodes<'a, I>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.nodes.extend(labels.into_iter().map(str::to_string));
        self
    }

    /// Declare an edge between two (eventually declared) nodes.
    pub fn edge(&mut self, from: &str, to: &str, weight: Weight) -> &mut Self {
        self.edges.push((from.to_string(), to.to_string(), weight));
        self
    }

    /// Declare an edge and both of its endpoints.
    pub fn link(&mut self, from: &str, to: &str, weight: Weight) -> &mut Self {
        self.node(from).node(to).edge(from, to, weight)
    }

    /// Build the final WeightedGraph.
    pub fn build(&self) -> GraphResult<WeightedGraph> {
        let mut graph = WeightedGraph::new();
        for label in &self.nodes {
            graph.add_node(label);
        }
        for (from, to, weight) in &self.edges {
            graph.add_edge(from, to, *weight)?;
        }
        Ok(graph)
    }
}
