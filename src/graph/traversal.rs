//! Graph traversal algorithms (DFS cycle check, BFS components).

use std::collections::VecDeque;

use crate::types::{EdgeId, NodeId};

use super::WeightedGraph;

impl WeightedGraph {
    /// True if any connected component contains a cycle.
    pub fn has_cycle(&self) -> bool {
        has_cycle(self)
    }

    /// Node labels grouped by connected component, in discovery order.
    pub fn connected_components(&self) -> Vec<Vec<&str>> {
        connected_components(self)
            .into_iter()
            .map(|ids| ids.into_iter().map(|id| self.label(id)).collect())
            .collect()
    }

    /// True if every node is reachable from every other. An empty graph counts.
    pub fn is_connected(&self) -> bool {
        connected_components(self).len() <= 1
    }
}

/// Depth-first cycle detection over every component.
///
/// A node reached again through any edge other than the one it was entered
/// by closes a cycle. Parents are tracked by edge id rather than node id, so
/// the check does not depend on how edges are mirrored.
pub fn has_cycle(graph: &WeightedGraph) -> bool {
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<(NodeId, Option<EdgeId>)> = Vec::new();

    for root in 0..graph.node_count() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, None));

        while let Some((current, via)) = stack.pop() {
            for (edge, neighbor, _) in graph.neighbors(current) {
                if Some(edge) == via {
                    continue;
                }
                if visited[neighbor] {
                    log::debug!(
                        "Cycle closed at '{}' from '{}'",
                        graph.label(neighbor),
                        graph.label(current)
                    );
                    return true;
                }
                visited[neighbor] = true;
                stack.push((neighbor, Some(edge)));
            }
        }
    }

    false
}

/// BFS from each unvisited node; returns node ids per component.
pub fn connected_components(graph: &WeightedGraph) -> Vec<Vec<NodeId>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for root in 0..graph.node_count() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        queue.push_back(root);
        let mut component = Vec::new();

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for (_, neighbor, _) in graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(component);
    }

    components
}
