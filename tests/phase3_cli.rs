//! Phase 3 tests: CLI argument parsing and command output.

use weighted_graph::cli::commands::{
    build_graph, cmd_cycle, cmd_describe, cmd_info, cmd_mst, cmd_path, parse_edge_spec,
};
use weighted_graph::types::GraphError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==================== Parsing Tests ====================

#[test]
fn test_parse_edge_spec() {
    assert_eq!(
        parse_edge_spec("A:B:3").unwrap(),
        ("A".to_string(), "B".to_string(), 3)
    );
    assert_eq!(
        parse_edge_spec(" left : right : 10 ").unwrap(),
        ("left".to_string(), "right".to_string(), 10)
    );
}

#[test]
fn test_parse_edge_spec_rejects_bad_input() {
    for bad in ["A:B", "A:B:-1", "A:B:x", ":B:1", "A::1", ""] {
        assert_eq!(
            parse_edge_spec(bad),
            Err(GraphError::InvalidEdgeSpec(bad.to_string())),
            "input {:?}",
            bad
        );
    }
}

#[test]
fn test_build_graph_adds_endpoints() {
    let graph = build_graph(&strings(&["D"]), &strings(&["A:B:1", "B:C:2"])).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains_node("D"));
}

#[test]
fn test_build_graph_duplicate_edge() {
    let result = build_graph(&[], &strings(&["A:B:1", "B:A:2"]));
    assert!(matches!(result, Err(GraphError::DuplicateEdge { .. })));
}

// ==================== Command Tests ====================

#[test]
fn test_cmd_path_text_and_json() {
    let graph = build_graph(&strings(&["D"]), &strings(&["A:B:1", "B:C:2"])).unwrap();

    let text = cmd_path(&graph, "A", "C", false).unwrap();
    assert_eq!(text, "Distance: 3\nPath: A -> B -> C");

    let json: serde_json::Value =
        serde_json::from_str(&cmd_path(&graph, "A", "C", true).unwrap()).unwrap();
    assert_eq!(json["distance"], 3);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["reachable"], true);

    let unreachable: serde_json::Value =
        serde_json::from_str(&cmd_path(&graph, "A", "D", true).unwrap()).unwrap();
    assert!(unreachable["distance"].is_null());
    assert_eq!(unreachable["path"], serde_json::json!(["D"]));
    assert_eq!(
        cmd_path(&graph, "A", "D", false).unwrap(),
        "No path from A to D"
    );
}

#[test]
fn test_cmd_path_missing_node() {
    let graph = build_graph(&[], &strings(&["A:B:1"])).unwrap();
    assert_eq!(
        cmd_path(&graph, "A", "Q", false),
        Err(GraphError::MissingNode("Q".to_string()))
    );
}

#[test]
fn test_cmd_cycle() {
    let triangle = build_graph(&[], &strings(&["A:B:1", "B:C:1", "C:A:1"])).unwrap();
    assert_eq!(cmd_cycle(&triangle, false), "Cycle: yes");

    let json: serde_json::Value = serde_json::from_str(&cmd_cycle(&triangle, true)).unwrap();
    assert_eq!(json["has_cycle"], true);
}

#[test]
fn test_cmd_mst() {
    let graph = build_graph(&[], &strings(&["A:B:1", "B:C:2", "A:C:5"])).unwrap();
    assert_eq!(
        cmd_mst(&graph, false).unwrap(),
        "A - B (1)\nB - C (2)\nTotal weight: 3"
    );

    let json: serde_json::Value = serde_json::from_str(&cmd_mst(&graph, true).unwrap()).unwrap();
    assert_eq!(json["total_weight"], 3);
    assert_eq!(json["edges"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cmd_mst_disconnected() {
    let graph = build_graph(&strings(&["Z"]), &strings(&["A:B:1"])).unwrap();
    assert!(matches!(
        cmd_mst(&graph, false),
        Err(GraphError::UnreachableComponent { .. })
    ));
}

#[test]
fn test_cmd_describe_and_info() {
    let graph = build_graph(&strings(&["D"]), &strings(&["A:B:1"])).unwrap();
    assert_eq!(
        cmd_describe(&graph, false),
        "A is connected to [A -> B]\nB is connected to [B -> A]"
    );

    let info: serde_json::Value = serde_json::from_str(&cmd_info(&graph, true)).unwrap();
    assert_eq!(info["nodes"], 3);
    assert_eq!(info["edges"], 1);
    assert_eq!(info["components"], 2);
    assert_eq!(info["has_cycle"], false);
}
