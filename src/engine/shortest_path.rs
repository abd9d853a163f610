//! Single-source shortest paths (Dijkstra) and path reconstruction.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::WeightedGraph;
use crate::types::{Distance, GraphResult, NodeId};

/// Distance to a target plus the labels along one shortest route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Total weight of the route, or unreachable.
    pub distance: Distance,
    /// Labels from source to target inclusive. Just the target when unreachable.
    pub path: Vec<String>,
}

impl ShortestPath {
    /// True if the target could be reached from the source.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Full result of a Dijkstra search from one source.
#[derive(Debug)]
pub struct ShortestPathTree<'g> {
    graph: &'g WeightedGraph,
    source: NodeId,
    /// Best known distance per node; `None` means unreachable.
    distances: Vec<Option<u64>>,
    /// Node each best distance was reached from.
    predecessors: Vec<Option<NodeId>>,
}

impl<'g> ShortestPathTree<'g> {
    /// Label of the source node.
    pub fn source(&self) -> &'g str {
        self.graph.label(self.source)
    }

    /// Distance from the source to `label`.
    pub fn distance_to(&self, label: &str) -> GraphResult<Distance> {
        let id = self.graph.require(label)?;
        Ok(self.distances[id].into())
    }

    /// Labels along the shortest route from the source to `label`.
    ///
    /// Walks predecessor links back from the target. An unreachable target
    /// has no predecessors, so the result is just `[label]`.
    pub fn path_to(&self, label: &str) -> GraphResult<Vec<String>> {
        let target = self.graph.require(label)?;
        let mut path = vec![self.graph.label(target).to_string()];
        let mut current = self.predecessors[target];
        while let Some(prev) = current {
            path.push(self.graph.label(prev).to_string());
            current = self.predecessors[prev];
        }
        path.reverse();
        Ok(path)
    }

    /// Distance and path to `label` together.
    pub fn route_to(&self, label: &str) -> GraphResult<ShortestPath> {
        Ok(ShortestPath {
            distance: self.distance_to(label)?,
            path: self.path_to(label)?,
        })
    }

    /// Every node reachable from the source with its distance, nearest first.
    pub fn reachable(&self) -> Vec<(&'g str, u64)> {
        let mut out: Vec<(&'g str, u64)> = self
            .distances
            .iter()
            .enumerate()
            .filter_map(|(id, d)| d.map(|d| (self.graph.label(id), d)))
            .collect();
        out.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        out
    }
}

/// Run Dijkstra from `from` over the whole reachable component.
///
/// The search does not stop early at any target. A neighbor's distance and
/// predecessor are written only when the new route is strictly shorter.
pub fn shortest_paths<'g>(
    graph: &'g WeightedGraph,
    from: &str,
) -> GraphResult<ShortestPathTree<'g>> {
    let source = graph.require(from)?;
    let n = graph.node_count();

    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();

    distances[source] = Some(0);
    queue.push(Reverse((0, source)));

    while let Some(Reverse((current_distance, current))) = queue.pop() {
        // Stale entry from an earlier, longer relaxation.
        if visited[current] {
            continue;
        }
        visited[current] = true;

        for (_, neighbor, weight) in graph.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            let candidate = current_distance + u64::from(weight);
            let improves = distances[neighbor].map_or(true, |known| candidate < known);
            if improves {
                log::trace!(
                    "Relax {} -> {}: {}",
                    graph.label(current),
                    graph.label(neighbor),
                    candidate
                );
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(current);
                queue.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Ok(ShortestPathTree {
        graph,
        source,
        distances,
        predecessors,
    })
}

/// Shortest distance and route between two labels.
pub fn shortest_path(graph: &WeightedGraph, from: &str, to: &str) -> GraphResult<ShortestPath> {
    let result = shortest_paths(graph, from)?.route_to(to)?;
    log::debug!(
        "Shortest path {} -> {}: {} ({})",
        from,
        to,
        result.path.join(" "),
        result.distance
    );
    Ok(result)
}

impl WeightedGraph {
    /// Shortest distance and route between two labels.
    ///
    /// An unreachable target is not an error: the distance is
    /// [`Distance::Unreachable`] and the path holds only the target.
    pub fn shortest_path(&self, from: &str, to: &str) -> GraphResult<ShortestPath> {
        shortest_path(self, from, to)
    }

    /// Distances and routes from `from` to every node.
    pub fn shortest_paths(&self, from: &str) -> GraphResult<ShortestPathTree<'_>> {
        shortest_paths(self, from)
    }
}
