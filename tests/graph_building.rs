//! End-to-end graph building scenarios through the checked tier.

use dag_chain::prelude::*;

fn chain_ids(g: &Graph) -> Vec<u32> {
    g.chain().map(|id| id.get()).collect()
}

/// v0; v1 depends on v0; v2; v3 depends on v2; v4 depends on v0.
fn five_vertex_scenario() -> (Graph, Vec<VertexId>) {
    let mut g: Graph = Graph::new();
    let v0 = g.add_vertex((), &[]).unwrap();
    let v1 = g.add_vertex((), &[v0]).unwrap();
    let v2 = g.add_vertex((), &[]).unwrap();
    let v3 = g.add_vertex((), &[v2]).unwrap();
    let v4 = g.add_vertex((), &[v0]).unwrap();
    (g, vec![v0, v1, v2, v3, v4])
}

#[test]
fn vertex_ids_are_monotonic_from_zero() {
    let (g, ids) = five_vertex_scenario();
    for (n, id) in ids.iter().enumerate() {
        assert_eq!(id.get() as usize, n);
        assert_eq!(g[*id].id(), *id);
    }
    assert_eq!(g.vertices().len(), 5);
}

#[test]
fn dependency_edges_are_created_in_order() {
    let (g, ids) = five_vertex_scenario();
    assert_eq!(g.edges().len(), 3);
    assert_eq!(g.edges()[0].endpoints(), (ids[0], ids[1]));
    assert_eq!(g.edges()[1].endpoints(), (ids[2], ids[3]));
    assert_eq!(g.edges()[2].endpoints(), (ids[0], ids[4]));
    for (n, e) in g.edges().iter().enumerate() {
        assert_eq!(e.id().get() as usize, n);
    }
}

#[test]
fn vertices_are_appended_in_chain_order() {
    let (g, _) = five_vertex_scenario();
    assert_eq!(chain_ids(&g), vec![0, 1, 2, 3, 4]);
}

#[test]
fn connecting_to_an_ancestor_is_rejected_without_mutation() {
    let (mut g, ids) = five_vertex_scenario();
    let before = g.edges().len();
    let err = g.add_edge(ids[4], ids[0], ()).unwrap_err();
    assert_eq!(
        err,
        GraphError::CircularConnection {
            top: ids[4],
            bottom: ids[0]
        }
    );
    assert_eq!(g.edges().len(), before);
}

#[test]
fn a_legal_cross_edge_gets_the_next_id() {
    let (mut g, ids) = five_vertex_scenario();
    let e = g.add_edge(ids[3], ids[0], ()).unwrap();
    assert_eq!(e.get(), 3);
    assert_eq!(g[e].top(), ids[3]);
    assert_eq!(g[e].bottom(), ids[0]);
}

#[test]
fn duplicate_edges_are_rejected_through_add_edge() {
    let (mut g, ids) = five_vertex_scenario();
    // v0 -> v1 already exists; the pre-check reports it as unavailable.
    assert!(matches!(
        g.add_edge(ids[0], ids[1], ()),
        Err(GraphError::CircularConnection { .. })
    ));
}

#[test]
fn duplicate_dependency_fails_with_partial_state_retained() {
    let mut g: Graph = Graph::new();
    let v0 = g.add_vertex((), &[]).unwrap();
    let err = g.add_vertex((), &[v0, v0]).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateConnection { .. }));
    // The vertex and the first dependency edge are already in place.
    assert_eq!(g.vertices().len(), 2);
    assert_eq!(g.edges().len(), 1);
    assert_eq!(chain_ids(&g), vec![0, 1]);
}

#[test]
fn unknown_dependency_is_rejected() {
    let mut g: Graph = Graph::new();
    g.add_vertex((), &[]).unwrap();
    assert!(matches!(
        g.add_vertex((), &[VertexId::new(42)]),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        g.add_edge(VertexId::new(42), VertexId::new(0), ()),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn traverse_early_stop_yields_a_prefix() {
    let (g, _) = five_vertex_scenario();
    let mut seen = Vec::new();
    g.traverse(|v, _| {
        seen.push(v.id().get());
        seen.len() == 3
    });
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn available_edges_concatenates_per_vertex_menus() {
    let (g, ids) = five_vertex_scenario();
    let all = g.available_edges();
    let mut expected = Vec::new();
    for &v in &ids {
        expected.extend(g.available_connections(v));
    }
    assert_eq!(all, expected);
    // Every listed edge must actually be addable on a fresh copy.
    for proto in &all {
        let mut copy = g.clone();
        assert!(copy.add_edge(proto.top, proto.bottom, ()).is_ok());
    }
}

#[test]
fn clear_resets_both_collections_and_restarts_ids() {
    let (mut g, _) = five_vertex_scenario();
    g.clear();
    assert!(g.vertices().is_empty());
    assert!(g.edges().is_empty());
    let v = g.add_vertex((), &[]).unwrap();
    assert_eq!(v.get(), 0);
}

#[test]
fn vertex_content_is_carried_and_mutable() {
    let mut g: Graph<&'static str> = Graph::new();
    let v = g.add_vertex("draft", &[]).unwrap();
    assert_eq!(g[v].content, "draft");
    g.vertex_mut(v).unwrap().content = "final";
    assert_eq!(g[v].content, "final");
}

#[test]
fn a_built_graph_always_validates() {
    let (mut g, ids) = five_vertex_scenario();
    g.add_edge(ids[3], ids[0], ()).unwrap();
    g.reflow(ids[3]);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn reflow_after_a_cross_edge_restores_presentation_order() {
    let (mut g, ids) = five_vertex_scenario();
    // v3 -> v0 is legal but leaves v3 after its dependent v0 in the chain.
    g.add_edge(ids[3], ids[0], ()).unwrap();
    g.reflow(ids[3]);
    let order = chain_ids(&g);
    let pos = |id: u32| order.iter().position(|&x| x == id).unwrap();
    assert!(pos(3) < pos(0));
    // v2 -> v3 must also hold after the upward pass.
    assert!(pos(2) < pos(3));
}
