//! Property tests: invariant preservation under random operation sequences.

use dag_chain::prelude::*;
use proptest::prelude::*;

const N: usize = 8;

fn graph_with_vertices() -> (Graph, Vec<VertexId>) {
    let mut g: Graph = Graph::new();
    let ids = (0..N)
        .map(|_| g.add_vertex((), &[]).unwrap())
        .collect::<Vec<_>>();
    (g, ids)
}

proptest! {
    /// Any sequence of chain edits keeps the chain well-formed: mirrors
    /// intact, every vertex reachable from a head, no circular segments.
    #[test]
    fn chain_edits_preserve_well_formedness(
        ops in prop::collection::vec((0u8..3, 0usize..N, 0usize..N), 1..50)
    ) {
        let (mut g, ids) = graph_with_vertices();
        for (op, a, b) in ops {
            let (anchor, vertex) = (ids[a], ids[b]);
            match op {
                0 if anchor != vertex => { g.insert_before(anchor, vertex); }
                1 if anchor != vertex => { g.insert_after(anchor, vertex); }
                _ => { g.unlink(vertex); }
            }
            prop_assert!(g.validate_invariants().is_ok());
        }
    }

    /// Chain edits never lose a vertex: the union of all chains is always
    /// the full vertex set.
    #[test]
    fn chain_edits_never_lose_vertices(
        ops in prop::collection::vec((0u8..3, 0usize..N, 0usize..N), 1..50)
    ) {
        let (mut g, ids) = graph_with_vertices();
        for (op, a, b) in ops {
            let (anchor, vertex) = (ids[a], ids[b]);
            match op {
                0 if anchor != vertex => { g.insert_before(anchor, vertex); }
                1 if anchor != vertex => { g.insert_after(anchor, vertex); }
                _ => { g.unlink(vertex); }
            }
        }
        let mut reachable = 0usize;
        for &id in &ids {
            if g[id].previous().is_none() {
                reachable += g.chain_from(id).count();
            }
        }
        prop_assert_eq!(reachable, N);
    }

    /// The checked tier never lets a cycle through, whatever edges are
    /// requested: acyclicity holds and no vertex is ever its own ancestor.
    #[test]
    fn add_edge_preserves_acyclicity(
        pairs in prop::collection::vec((0usize..N, 0usize..N), 0..40)
    ) {
        let (mut g, ids) = graph_with_vertices();
        for (t, b) in pairs {
            let result = g.add_edge(ids[t], ids[b], ());
            if let Err(e) = result {
                let is_circular = matches!(e, GraphError::CircularConnection { .. });
                prop_assert!(is_circular);
            }
        }
        prop_assert!(g.validate_invariants().is_ok());
        for &id in &ids {
            prop_assert!(!g.is_above(id, id));
            prop_assert!(!g.is_below(id, id));
        }
    }

    /// `available_connections` is exact: it lists precisely the candidates
    /// that are not the vertex itself, not already directly connected, and
    /// not transitively above it.
    #[test]
    fn available_connections_are_exact(
        pairs in prop::collection::vec((0usize..N, 0usize..N), 0..25)
    ) {
        let (mut g, ids) = graph_with_vertices();
        for (t, b) in pairs {
            let _ = g.add_edge(ids[t], ids[b], ());
        }
        for &v in &ids {
            let menu = g.available_connections(v);
            for &c in &ids {
                let expected = c != v && !g.is_below(c, v) && !g.has_edge(v, c);
                prop_assert_eq!(menu.iter().any(|p| p.bottom == c), expected);
            }
        }
    }

    /// Reflow is idempotent: a second call with no intervening structural
    /// change leaves the chain order untouched.
    #[test]
    fn reflow_is_idempotent(
        pairs in prop::collection::vec((0usize..N, 0usize..N), 0..25),
        start in 0usize..N,
    ) {
        let (mut g, ids) = graph_with_vertices();
        for (t, b) in pairs {
            let _ = g.add_edge(ids[t], ids[b], ());
        }
        g.reflow(ids[start]);
        let once: Vec<VertexId> = g.chain().collect();
        g.reflow(ids[start]);
        let twice: Vec<VertexId> = g.chain().collect();
        prop_assert_eq!(once, twice);
    }
}
