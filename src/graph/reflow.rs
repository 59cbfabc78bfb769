//! Reflow: local repair of the chain order against the link relation.
//!
//! After a structural change, a vertex may end up positioned after one of
//! its dependents. `reflow` nudges the vertex back in front of any downlink
//! bottom that precedes it, then propagates the same fix into every ancestor
//! so corrections ripple upward through the dependency chain.
//!
//! This is a local, best-effort fix-up, not a topological sort: it only
//! repairs violations directly observable from a vertex's immediate
//! downlinks and assumes the graph was recently perturbed by a single local
//! edit. Multi-hop violations further from the edit may survive a single
//! call.

use crate::debug_invariants::DebugInvariants;
use crate::graph::Graph;
use crate::vertex::VertexId;

impl<V, E> Graph<V, E> {
    /// Moves `vertex` immediately before any of its downlink bottoms that
    /// currently precede it in the chain, then repeats the repair for every
    /// vertex in [`Graph::above`], pre-order.
    ///
    /// Calling `reflow` twice in succession with no intervening structural
    /// change leaves the chain unchanged the second time.
    pub fn reflow(&mut self, vertex: VertexId) {
        let mut work = vec![vertex];
        while let Some(current) = work.pop() {
            let downlinks = self.vertices[current.index()].downlinks.clone();
            for edge in downlinks {
                let bottom = self[edge].bottom;
                if self.is_before(bottom, current) {
                    log::trace!("reflow: moving vertex {current} before its downlink {bottom}");
                    self.insert_before(bottom, current);
                }
            }
            let ancestors = self.above(current);
            work.extend(ancestors.into_iter().rev());
        }
        self.debug_assert_invariants();
    }
}
