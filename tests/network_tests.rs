use transit_sssp::graph::{Graph, MutableGraph, Network};
use transit_sssp::Error;

// Four stops in a line plus a shortcut, as used across the test suite
fn create_line_network() -> Network {
    let mut network = Network::new();
    for v in 1..=4 {
        network.add_vertex(v).unwrap();
    }
    network.add_arc(1, 2, 1, 0).unwrap();
    network.add_arc(2, 3, 2, 1).unwrap();
    network.add_arc(1, 3, 5, 2).unwrap();
    network.add_arc(3, 4, 1, 0).unwrap();
    network
}

#[test]
fn test_empty_network() {
    let network: Network = Network::new();
    assert!(network.is_empty());
    assert_eq!(network.vertex_count(), 0);
    assert_eq!(network.arc_count(), 0);
    assert!(!network.has_vertex(0));
}

#[test]
fn test_counts_follow_insertions() {
    let network = create_line_network();
    assert!(!network.is_empty());
    assert_eq!(network.vertex_count(), 4);
    assert_eq!(network.arc_count(), 4);
    assert!(network.has_arc(1, 2).unwrap());
    // Arcs are directed
    assert!(!network.has_arc(2, 1).unwrap());
}

#[test]
fn test_vertex_zero_is_a_regular_vertex() {
    let mut network: Network = Network::new();
    network.add_vertex(0).unwrap();
    network.add_vertex(1).unwrap();
    network.add_arc(0, 1, 3, 0).unwrap();
    assert!(network.has_vertex(0));
    assert_eq!(network.arc_weight(0, 1).unwrap(), 3);
}

#[test]
fn test_duplicate_vertex_and_arc_are_rejected() {
    let mut network = create_line_network();
    assert_eq!(network.add_vertex(1), Err(Error::VertexAlreadyExists(1)));
    assert_eq!(network.add_arc(1, 2, 7, 0), Err(Error::ArcAlreadyExists(1, 2)));

    // Failed insertions leave the network untouched
    assert_eq!(network.vertex_count(), 4);
    assert_eq!(network.arc_count(), 4);
    assert_eq!(network.arc_weight(1, 2).unwrap(), 1);
}

#[test]
fn test_arc_requires_existing_vertices() {
    let mut network = create_line_network();
    assert_eq!(network.add_arc(1, 9, 1, 0), Err(Error::VertexNotFound(9)));
    assert_eq!(network.add_arc(9, 1, 1, 0), Err(Error::VertexNotFound(9)));
    assert_eq!(network.has_arc(8, 1), Err(Error::VertexNotFound(8)));
    assert_eq!(network.arc_count(), 4);
}

#[test]
fn test_missing_queries_raise_not_found() {
    let mut network = create_line_network();

    assert!(network.arc_weight(2, 1).unwrap_err().is_not_found());
    assert!(network.arc_type(4, 1).unwrap_err().is_not_found());
    assert!(network.arc_weight(1, 42).unwrap_err().is_not_found());
    assert!(network.remove_arc(4, 3).unwrap_err().is_not_found());
    assert!(network.remove_arc(42, 3).unwrap_err().is_not_found());
    assert!(network.update_arc_weight(4, 3, 1).unwrap_err().is_not_found());
    assert_eq!(network.remove_vertex(42), Err(Error::VertexNotFound(42)));
    assert_eq!(network.out_degree(42), Err(Error::VertexNotFound(42)));
}

#[test]
fn test_add_remove_vertex_round_trip() {
    let mut network = create_line_network();
    let vertices_before = network.vertex_count();
    let arcs_before = network.arc_count();

    network.add_vertex(5).unwrap();
    network.remove_vertex(5).unwrap();

    assert_eq!(network.vertex_count(), vertices_before);
    assert_eq!(network.arc_count(), arcs_before);
    assert!(!network.has_vertex(5));
}

#[test]
fn test_remove_vertex_drops_incident_arcs() {
    let mut network = create_line_network();
    network.add_vertex(5).unwrap();
    network.add_arc(5, 1, 2, 0).unwrap();
    network.add_arc(4, 5, 2, 0).unwrap();
    network.add_arc(5, 5, 1, 3).unwrap();
    assert_eq!(network.arc_count(), 7);

    network.remove_vertex(5).unwrap();
    assert_eq!(network.vertex_count(), 4);
    assert_eq!(network.arc_count(), 4);
    assert_eq!(network.incoming_arcs(1).count(), 0);
    assert_eq!(network.out_degree(4).unwrap(), 0);

    // No dangling arcs towards the removed vertex
    for v in network.vertices() {
        assert!(network.outgoing_arcs(v).all(|(target, _)| target != 5));
    }

    // The id can be reused afterwards
    network.add_vertex(5).unwrap();
    assert!(!network.has_arc(4, 5).unwrap());
}

#[test]
fn test_remove_middle_vertex() {
    let mut network = create_line_network();
    network.remove_vertex(3).unwrap();
    assert_eq!(network.vertex_count(), 3);
    // 2->3, 1->3 and 3->4 disappear
    assert_eq!(network.arc_count(), 1);
    assert!(network.has_arc(1, 2).unwrap());
    assert_eq!(network.incoming_arcs(4).count(), 0);
}

#[test]
fn test_add_remove_arc_round_trip() {
    let mut network = create_line_network();
    let arcs_before = network.arc_count();

    network.add_arc(4, 1, 9, 2).unwrap();
    assert_eq!(network.arc_count(), arcs_before + 1);
    network.remove_arc(4, 1).unwrap();

    assert_eq!(network.arc_count(), arcs_before);
    assert!(!network.has_arc(4, 1).unwrap());
    assert_eq!(network.incoming_arcs(1).count(), 0);
}

#[test]
fn test_update_weight_keeps_type_and_membership() {
    let mut network = create_line_network();
    network.update_arc_weight(2, 3, 40).unwrap();

    assert_eq!(network.arc_weight(2, 3).unwrap(), 40);
    assert_eq!(network.arc_type(2, 3).unwrap(), 1);
    assert!(network.has_arc(2, 3).unwrap());
    assert_eq!(network.arc_count(), 4);
}

#[test]
fn test_negative_weight_detection_and_clear() {
    let mut network = create_line_network();
    assert!(!network.has_negative_weights());
    network.update_arc_weight(1, 3, -2).unwrap();
    assert!(network.has_negative_weights());

    network.clear();
    assert!(network.is_empty());
    assert_eq!(network.arc_count(), 0);
}

#[test]
fn test_unsigned_weights() {
    let mut network: Network<u32> = Network::with_capacity(2);
    network.add_vertex(10).unwrap();
    network.add_vertex(20).unwrap();
    network.add_arc(10, 20, 7, 1).unwrap();
    assert_eq!(network.arc_weight(10, 20).unwrap(), 7u32);
    assert_eq!(network.out_degree(10).unwrap(), 1);
}
