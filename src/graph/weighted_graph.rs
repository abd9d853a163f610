//! Core graph structure — node and edge arenas with a label index.

use std::collections::HashMap;

use crate::types::{Arc, Edge, EdgeId, GraphError, GraphResult, Node, NodeId, Weight};

/// An append-only, undirected, weighted graph keyed by node label.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// All nodes, in insertion order.
    nodes: Vec<Node>,
    /// All edges, in insertion order. Each logical connection appears once.
    edges: Vec<Edge>,
    /// Label index: label -> position in `nodes`.
    index: HashMap<String, NodeId>,
}

impl WeightedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node if its label is absent. Returns the node's id either way.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(label));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Connect two existing nodes with an undirected edge.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<EdgeId> {
        let a = self.require(from)?;
        let b = self.require(to)?;

        if a == b {
            return Err(GraphError::SelfLoop(from.to_string()));
        }
        if self.edge_between(a, b).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(a, b, weight));
        self.nodes[a].edges.push(id);
        self.nodes[b].edges.push(id);
        Ok(id)
    }

    /// True if a node with this label exists.
    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Look up a node id by label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Look up a node id by label, failing with [`GraphError::MissingNode`].
    pub fn require(&self, label: &str) -> GraphResult<NodeId> {
        self.node_id(label)
            .ok_or_else(|| GraphError::MissingNode(label.to_string()))
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Label of a node id. Panics on an id from another graph.
    pub(crate) fn label(&self, id: NodeId) -> &str {
        &self.nodes[id].label
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All nodes (immutable slice).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Every logical edge once, viewed from the endpoint named first.
    pub fn edges(&self) -> impl Iterator<Item = Arc<'_>> + '_ {
        self.edges.iter().map(move |e| Arc {
            from: self.label(e.a),
            to: self.label(e.b),
            weight: e.weight,
        })
    }

    /// Outgoing view of every edge incident to `label`, in insertion order.
    ///
    /// An edge added as `add_edge(a, b, w)` shows up as `a -> b` here for `a`
    /// and as `b -> a` for `b`.
    pub fn adjacency(&self, label: &str) -> GraphResult<Vec<Arc<'_>>> {
        let id = self.require(label)?;
        let arcs = self
            .neighbors(id)
            .map(|(_, to, weight)| Arc {
                from: self.label(id),
                to: self.label(to),
                weight,
            })
            .collect();
        Ok(arcs)
    }

    /// Weight of the edge between two labels, if they are connected.
    pub fn weight_between(&self, from: &str, to: &str) -> GraphResult<Option<Weight>> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        Ok(self.edge_between(a, b).map(|e| self.edges[e].weight))
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Incident edges of a node as `(edge_id, neighbor_id, weight)`.
    pub(crate) fn neighbors(
        &self,
        id: NodeId,
    ) -> impl Iterator<Item = (EdgeId, NodeId, Weight)> + '_ {
        self.nodes[id].edges.iter().filter_map(move |&e| {
            let edge = &self.edges[e];
            edge.other(id).map(|to| (e, to, edge.weight))
        })
    }

    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        // Scan the endpoint with fewer edges.
        let probe = if self.nodes[a].degree() <= self.nodes[b].degree() {
            a
        } else {
            b
        };
        self.nodes[probe]
            .edges
            .iter()
            .copied()
            .find(|&e| self.edges[e].connects(a, b))
    }
}
