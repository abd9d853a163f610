//! Minimum spanning tree (Prim).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::WeightedGraph;
use crate::types::{EdgeId, GraphError, GraphResult, NodeId, Weight};

/// Frontier entry: cheapest first, then oldest edge, for deterministic ties.
type Candidate = Reverse<(Weight, EdgeId, NodeId, NodeId)>;

/// Grow a minimum spanning tree from the first node, as a new graph.
///
/// Fails with [`GraphError::EmptyGraph`] on an empty graph and with
/// [`GraphError::UnreachableComponent`] when the frontier runs dry before
/// every node is covered.
pub fn minimum_spanning_tree(graph: &WeightedGraph) -> GraphResult<WeightedGraph> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let total = graph.node_count();
    let mut tree = WeightedGraph::new();
    let mut in_tree = vec![false; total];
    let mut queue: BinaryHeap<Candidate> = BinaryHeap::new();

    let start: NodeId = 0;
    tree.add_node(graph.label(start));
    in_tree[start] = true;
    enqueue_frontier(graph, start, &in_tree, &mut queue);

    while tree.node_count() < total {
        let Some(Reverse((weight, _, from, to))) = queue.pop() else {
            log::warn!(
                "Spanning tree stalled at {} of {} nodes",
                tree.node_count(),
                total
            );
            return Err(GraphError::UnreachableComponent {
                reached: tree.node_count(),
                total,
            });
        };

        if in_tree[to] {
            continue;
        }

        tree.add_node(graph.label(to));
        tree.add_edge(graph.label(from), graph.label(to), weight)?;
        in_tree[to] = true;
        enqueue_frontier(graph, to, &in_tree, &mut queue);
    }

    log::debug!(
        "Spanning tree: {} nodes, {} edges, weight {}",
        tree.node_count(),
        tree.edge_count(),
        tree.total_weight()
    );
    Ok(tree)
}

fn enqueue_frontier(
    graph: &WeightedGraph,
    from: NodeId,
    in_tree: &[bool],
    queue: &mut BinaryHeap<Candidate>,
) {
    for (edge, to, weight) in graph.neighbors(from) {
        if !in_tree[to] {
            queue.push(Reverse((weight, edge, from, to)));
        }
    }
}

impl WeightedGraph {
    /// A minimum spanning tree of this graph as an independent graph.
    pub fn minimum_spanning_tree(&self) -> GraphResult<WeightedGraph> {
        minimum_spanning_tree(self)
    }
}
