//! CLI command implementations.
//!
//! Each command renders its result as text or pretty JSON and returns it for
//! the binary to print.

use crate::graph::WeightedGraph;
use crate::types::{GraphError, GraphResult, Weight};

/// Parse an edge given as `FROM:TO:WEIGHT`.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(String, String, Weight)> {
    let mut parts = spec.splitn(3, ':');
    let from = parts.next().map(str::trim).filter(|s| !s.is_empty());
    let to = parts.next().map(str::trim).filter(|s| !s.is_empty());
    let weight = parts.next().and_then(|w| w.trim().parse::<Weight>().ok());

    match (from, to, weight) {
        (Some(from), Some(to), Some(weight)) => Ok((from.to_string(), to.to_string(), weight)),
        _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    }
}

/// Build a graph from `--node` labels and `--edge` specs.
///
/// Edge endpoints are added as nodes automatically.
pub fn build_graph(nodes: &[String], edges: &[String]) -> GraphResult<WeightedGraph> {
    let mut graph = WeightedGraph::new();
    for label in nodes {
        graph.add_node(label);
    }
    for spec in edges {
        let (from, to, weight) = parse_edge_spec(spec)?;
        graph.add_node(&from);
        graph.add_node(&to);
        graph.add_edge(&from, &to, weight)?;
    }
    log::debug!(
        "Built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Shortest path between two nodes.
pub fn cmd_path(graph: &WeightedGraph, from: &str, to: &str, json: bool) -> GraphResult<String> {
    let result = graph.shortest_path(from, to)?;

    if json {
        let value = serde_json::json!({
            "from": from,
            "to": to,
            "reachable": result.is_reachable(),
            "distance": result.distance,
            "path": result.path,
        });
        Ok(serde_json::to_string_pretty(&value).unwrap_or_default())
    } else if result.is_reachable() {
        Ok(format!(
            "Distance: {}\nPath: {}",
            result.distance,
            result.path.join(" -> ")
        ))
    } else {
        Ok(format!("No path from {} to {}", from, to))
    }
}

/// Report whether the graph contains a cycle.
pub fn cmd_cycle(graph: &WeightedGraph, json: bool) -> String {
    let has_cycle = graph.has_cycle();
    if json {
        serde_json::to_string_pretty(&serde_json::json!({ "has_cycle": has_cycle }))
            .unwrap_or_default()
    } else if has_cycle {
        "Cycle: yes".to_string()
    } else {
        "Cycle: no".to_string()
    }
}

/// Minimum spanning tree edges and total weight.
pub fn cmd_mst(graph: &WeightedGraph, json: bool) -> GraphResult<String> {
    let tree = graph.minimum_spanning_tree()?;

    if json {
        let edges: Vec<serde_json::Value> = tree
            .edges()
            .map(|arc| {
                serde_json::json!({
                    "from": arc.from,
                    "to": arc.to,
                    "weight": arc.weight,
                })
            })
            .collect();
        let value = serde_json::json!({
            "nodes": tree.node_count(),
            "total_weight": tree.total_weight(),
            "edges": edges,
        });
        Ok(serde_json::to_string_pretty(&value).unwrap_or_default())
    } else {
        let mut lines: Vec<String> = tree
            .edges()
            .map(|arc| format!("{} - {} ({})", arc.from, arc.to, arc.weight))
            .collect();
        lines.push(format!("Total weight: {}", tree.total_weight()));
        Ok(lines.join("\n"))
    }
}

/// Adjacency dump, one line per connected node.
pub fn cmd_describe(graph: &WeightedGraph, json: bool) -> String {
    if json {
        let lines: Vec<String> = graph.describe().collect();
        serde_json::to_string_pretty(&lines).unwrap_or_default()
    } else {
        graph.describe().collect::<Vec<_>>().join("\n")
    }
}

/// Node/edge counts and connectivity summary.
pub fn cmd_info(graph: &WeightedGraph, json: bool) -> String {
    let components = graph.connected_components().len();
    if json {
        let value = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "total_weight": graph.total_weight(),
            "components": components,
            "has_cycle": graph.has_cycle(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_default()
    } else {
        [
            format!("Nodes: {}", graph.node_count()),
            format!("Edges: {}", graph.edge_count()),
            format!("Total weight: {}", graph.total_weight()),
            format!("Components: {}", components),
            format!("Cycle: {}", if graph.has_cycle() { "yes" } else { "no" }),
        ]
        .join("\n")
    }
}
