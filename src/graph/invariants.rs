//! Invariant validation for [`Graph`].
//!
//! The checks run in the order cheapest-first and return the first
//! violation: chain mirrors, chain termination, edge mirrors, parallel
//! edges, acyclicity. All checks are O(vertices + edges).

use crate::debug_invariants::DebugInvariants;
use crate::error::GraphError;
use crate::graph::Graph;
use std::collections::HashSet;

impl<V, E> DebugInvariants for Graph<V, E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "graph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        self.check_chain_mirrors()?;
        self.check_chain_termination()?;
        self.check_edge_mirrors()?;
        self.check_no_parallel_edges()?;
        self.check_acyclic()
    }
}

impl<V, E> Graph<V, E> {
    /// Every chain neighbour must point back: `v.next.previous == v` and
    /// `v.previous.next == v`.
    fn check_chain_mirrors(&self) -> Result<(), GraphError> {
        for v in &self.vertices {
            if let Some(next) = v.next {
                if self[next].previous != Some(v.id) {
                    return Err(GraphError::BrokenChainLink(v.id));
                }
            }
            if let Some(previous) = v.previous {
                if self[previous].next != Some(v.id) {
                    return Err(GraphError::BrokenChainLink(v.id));
                }
            }
        }
        Ok(())
    }

    /// Every vertex must be reachable from a chain head (`previous == None`).
    /// With mirrors intact, a vertex unreachable from any head can only sit
    /// on a circular chain segment.
    fn check_chain_termination(&self) -> Result<(), GraphError> {
        let mut visited = vec![false; self.vertices.len()];
        for v in &self.vertices {
            if v.previous.is_some() {
                continue;
            }
            let mut steps = 0usize;
            let mut cursor = Some(v.id);
            while let Some(current) = cursor {
                visited[current.index()] = true;
                steps += 1;
                if steps > self.vertices.len() {
                    return Err(GraphError::CircularChain(v.id));
                }
                cursor = self[current].next;
            }
        }
        for v in &self.vertices {
            if !visited[v.id.index()] {
                return Err(GraphError::CircularChain(v.id));
            }
        }
        Ok(())
    }

    /// Every edge must appear in its `top`'s downlinks and its `bottom`'s
    /// uplinks.
    fn check_edge_mirrors(&self) -> Result<(), GraphError> {
        for e in &self.edges {
            let mirrored = self[e.top].downlinks.contains(&e.id)
                && self[e.bottom].uplinks.contains(&e.id);
            if !mirrored {
                return Err(GraphError::MissingEdgeMirror(e.id));
            }
        }
        Ok(())
    }

    /// No two edges may share the same `(top, bottom)` pair.
    fn check_no_parallel_edges(&self) -> Result<(), GraphError> {
        for v in &self.vertices {
            let mut seen = HashSet::new();
            for &edge in &v.downlinks {
                let bottom = self[edge].bottom;
                if !seen.insert(bottom) {
                    return Err(GraphError::DuplicateConnection {
                        top: v.id,
                        bottom,
                    });
                }
            }
        }
        Ok(())
    }

    /// The link relation must be a DAG. Iterative three-colour depth-first
    /// search over downlinks.
    fn check_acyclic(&self) -> Result<(), GraphError> {
        const FRESH: u8 = 0;
        const OPEN: u8 = 1;
        const DONE: u8 = 2;

        let mut state = vec![FRESH; self.vertices.len()];
        for start in 0..self.vertices.len() {
            if state[start] != FRESH {
                continue;
            }
            state[start] = OPEN;
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            while let Some(&(current, child)) = stack.last() {
                let downlinks = &self.vertices[current].downlinks;
                if child < downlinks.len() {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 += 1;
                    }
                    let bottom = self[downlinks[child]].bottom.index();
                    match state[bottom] {
                        FRESH => {
                            state[bottom] = OPEN;
                            stack.push((bottom, 0));
                        }
                        OPEN => return Err(GraphError::CycleDetected),
                        _ => {}
                    }
                } else {
                    state[current] = DONE;
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}
