//! Phase 1 tests: towns, edges, and graph construction.

use kiwirail::graph::{GraphBuilder, RailGraph};
use kiwirail::types::{Edge, RailError, RouteDistance, Town, Trip, NO_SUCH_ROUTE};

// ==================== Helper ====================

/// The sample network: AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7.
fn canonical() -> RailGraph {
    let mut builder = GraphBuilder::new();
    builder
        .link("A", "B", 5)
        .link("B", "C", 4)
        .link("C", "D", 8)
        .link("D", "C", 8)
        .link("D", "E", 6)
        .link("A", "D", 5)
        .link("C", "E", 2)
        .link("E", "B", 3)
        .link("A", "E", 7);
    builder.build().unwrap()
}

// ==================== Data Type Tests ====================

#[test]
fn test_town_identity_is_label() {
    let a1 = Town::new("A");
    let a2 = Town::from("A");
    assert_eq!(a1, a2);
    assert_eq!(a1.label(), "A");
    assert_eq!(&*a1, "A");
    assert_ne!(a1, Town::new("B"));
}

#[test]
fn test_edge_display() {
    let edge = Edge::new("A", "B", 5);
    assert_eq!(edge.to_string(), "AB5");
}

#[test]
fn test_route_distance_display() {
    assert_eq!(RouteDistance::Distance(22).to_string(), "22");
    assert_eq!(RouteDistance::NoSuchRoute.to_string(), NO_SUCH_ROUTE);
    assert_eq!(RouteDistance::NoSuchRoute.to_string(), "NO SUCH ROUTE");
}

#[test]
fn test_route_distance_json() {
    assert_eq!(
        serde_json::to_string(&RouteDistance::Distance(9)).unwrap(),
        "9"
    );
    assert_eq!(
        serde_json::to_string(&RouteDistance::NoSuchRoute).unwrap(),
        "\"NO SUCH ROUTE\""
    );
}

#[test]
fn test_route_distance_from_option() {
    assert_eq!(RouteDistance::from(Some(4)), RouteDistance::Distance(4));
    assert_eq!(RouteDistance::from(None), RouteDistance::NoSuchRoute);
    assert_eq!(RouteDistance::Distance(4).value(), Some(4));
    assert!(!RouteDistance::NoSuchRoute.is_route());
}

#[test]
fn test_trip_display_and_stops() {
    let trip = Trip {
        towns: vec!["C".into(), "E".into(), "B".into(), "C".into()],
        distance: 9,
    };
    assert_eq!(trip.to_string(), "C-E-B-C");
    assert_eq!(trip.stops(), 3);
}

// ==================== Construction Tests ====================

#[test]
fn test_build_canonical() {
    let graph = canonical();
    assert_eq!(graph.town_count(), 5);
    assert_eq!(graph.edge_count(), 9);
    let labels: Vec<&str> = graph.towns().iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_edges_sorted_by_source_then_target() {
    let graph = canonical();
    let rendered: Vec<String> = graph.edges().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["AB5", "AD5", "AE7", "BC4", "CD8", "CE2", "DC8", "DE6", "EB3"]
    );
}

#[test]
fn test_empty_graph() {
    let graph = GraphBuilder::new().build().unwrap();
    assert_eq!(graph.town_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains("A"));
}

#[test]
fn test_isolated_town() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 1).add_town("Z");
    let graph = builder.build().unwrap();
    assert!(graph.contains("Z"));
    assert_eq!(graph.town_count(), 3);
    assert!(graph.edges_from("Z").is_empty());
}

#[test]
fn test_from_parts() {
    let edges = vec![Edge::new("B", "A", 2), Edge::new("A", "B", 3)];
    let graph = RailGraph::from_parts(Vec::<Town>::new(), edges).unwrap();
    assert_eq!(graph.weight("A", "B"), Some(3));
    assert_eq!(graph.weight("B", "A"), Some(2));
    assert_eq!(graph.edges()[0].source.label(), "A");
}

#[test]
fn test_reject_self_loop() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "A", 5);
    match builder.build() {
        Err(RailError::SelfLoop(town)) => assert_eq!(town.label(), "A"),
        other => panic!("expected SelfLoop, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn test_reject_duplicate_edge() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 5).link("B", "C", 1).link("A", "B", 7);
    match builder.build() {
        Err(RailError::DuplicateEdge { from, to }) => {
            assert_eq!(from.label(), "A");
            assert_eq!(to.label(), "B");
        }
        other => panic!("expected DuplicateEdge, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn test_opposite_directions_are_distinct() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 5).link("B", "A", 9);
    let graph = builder.build().unwrap();
    assert_eq!(graph.weight("A", "B"), Some(5));
    assert_eq!(graph.weight("B", "A"), Some(9));
}

#[test]
fn test_reject_zero_weight() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 0);
    assert!(matches!(
        builder.build(),
        Err(RailError::InvalidWeight { weight: 0, .. })
    ));
}

#[test]
fn test_reject_negative_weight() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", -3);
    assert!(matches!(
        builder.build(),
        Err(RailError::InvalidWeight { weight: -3, .. })
    ));
}

#[test]
fn test_reject_oversized_weight() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", i64::from(u32::MAX) + 1);
    assert!(matches!(
        builder.build(),
        Err(RailError::InvalidWeight { .. })
    ));
}

#[test]
fn test_reject_zero_weight_from_parts() {
    let result = RailGraph::from_parts(Vec::<Town>::new(), vec![Edge::new("A", "B", 0)]);
    assert!(matches!(result, Err(RailError::InvalidWeight { .. })));
}

#[test]
fn test_reject_empty_label() {
    let mut builder = GraphBuilder::new();
    builder.link("", "B", 4);
    assert!(matches!(builder.build(), Err(RailError::EmptyTownLabel)));

    let mut builder = GraphBuilder::new();
    builder.add_town("");
    assert!(matches!(builder.build(), Err(RailError::EmptyTownLabel)));
}

// ==================== Lookup Tests ====================

#[test]
fn test_weight_lookup() {
    let graph = canonical();
    assert_eq!(graph.weight("A", "B"), Some(5));
    assert_eq!(graph.weight("C", "E"), Some(2));
    assert_eq!(graph.weight("B", "A"), None);
    assert_eq!(graph.weight("A", "C"), None);
    assert_eq!(graph.weight("A", "Q"), None);
    assert_eq!(graph.weight("Q", "A"), None);
}

#[test]
fn test_weight_lookup_with_towns() {
    let graph = canonical();
    let a = Town::new("A");
    let e = Town::new("E");
    assert_eq!(graph.weight(&a, &e), Some(7));
}

#[test]
fn test_contains() {
    let graph = canonical();
    for label in ["A", "B", "C", "D", "E"] {
        assert!(graph.contains(label));
    }
    assert!(!graph.contains("F"));
    assert!(!graph.contains("a"));
}

#[test]
fn test_neighbors_sorted_by_destination() {
    let graph = canonical();
    let out: Vec<(String, u32)> = graph
        .neighbors("A")
        .map(|(t, w)| (t.label().to_string(), w))
        .collect();
    assert_eq!(
        out,
        vec![
            ("B".to_string(), 5),
            ("D".to_string(), 5),
            ("E".to_string(), 7)
        ]
    );
}

#[test]
fn test_neighbors_stable_across_calls() {
    let graph = canonical();
    let first: Vec<_> = graph.neighbors("D").collect();
    let second: Vec<_> = graph.neighbors("D").collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_neighbors_unknown_town() {
    let graph = canonical();
    assert_eq!(graph.neighbors("Z").count(), 0);
    assert!(graph.edges_from("Z").is_empty());
}

#[test]
fn test_edges_from() {
    let graph = canonical();
    let edges = graph.edges_from("C");
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.source.label() == "C"));
    assert_eq!(edges[0].target.label(), "D");
    assert_eq!(edges[1].target.label(), "E");
}

#[test]
fn test_graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RailGraph>();

    let graph = std::sync::Arc::new(canonical());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = std::sync::Arc::clone(&graph);
            std::thread::spawn(move || graph.weight("D", "E"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(6));
    }
}
