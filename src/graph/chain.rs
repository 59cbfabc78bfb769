//! Chain primitives: the doubly-linked total order over vertices.
//!
//! The chain is a simple doubly-linked list threaded through the vertex
//! table via `previous`/`next` id fields. `insert_before`, `insert_after`
//! and `unlink` are the only operations that rewrite chain pointers; all
//! reordering (including initial placement by `add_vertex` and the moves
//! performed by reflow) goes through them, so the mirror invariant
//! (`v.next.previous == v` and `v.previous.next == v`) is maintained in one
//! place.
//!
//! Queries in this module take well-formed graph-issued ids as a
//! precondition and panic on out-of-range ids (arena indexing); they are
//! otherwise total and side-effect free.

use crate::graph::Graph;
use crate::vertex::VertexId;

impl<V, E> Graph<V, E> {
    /// Joins two chain positions such that `b` is `a`'s next. Passing `None`
    /// on either side terminates that end of the chain. Does not repair any
    /// links previously held by `a` or `b`.
    fn join(&mut self, a: Option<VertexId>, b: Option<VertexId>) {
        if let Some(a) = a {
            self.vertices[a.index()].next = b;
        }
        if let Some(b) = b {
            self.vertices[b.index()].previous = a;
        }
    }

    /// Removes `vertex` from the chain, joining its former neighbours
    /// directly and clearing its own pointers. Does not touch edges or the
    /// vertex table; the vertex becomes a singleton chain. Returns `vertex`.
    pub fn unlink(&mut self, vertex: VertexId) -> VertexId {
        let (previous, next) = {
            let v = &self.vertices[vertex.index()];
            (v.previous, v.next)
        };
        self.join(previous, next);
        let v = &mut self.vertices[vertex.index()];
        v.previous = None;
        v.next = None;
        vertex
    }

    /// Unlinks `vertex` from wherever it currently sits, then splices it
    /// directly before `anchor`. Returns `vertex`.
    ///
    /// `anchor == vertex` is a precondition violation.
    pub fn insert_before(&mut self, anchor: VertexId, vertex: VertexId) -> VertexId {
        debug_assert_ne!(anchor, vertex, "cannot insert a vertex relative to itself");
        self.unlink(vertex);
        let previous = self.vertices[anchor.index()].previous;
        self.join(previous, Some(vertex));
        self.join(Some(vertex), Some(anchor));
        vertex
    }

    /// Unlinks `vertex` from wherever it currently sits, then splices it
    /// directly after `anchor`. Returns `vertex`.
    ///
    /// `anchor == vertex` is a precondition violation.
    pub fn insert_after(&mut self, anchor: VertexId, vertex: VertexId) -> VertexId {
        debug_assert_ne!(anchor, vertex, "cannot insert a vertex relative to itself");
        self.unlink(vertex);
        let next = self.vertices[anchor.index()].next;
        self.join(Some(anchor), Some(vertex));
        self.join(Some(vertex), next);
        vertex
    }

    /// The first vertex in the chain containing `vertex`.
    pub fn first(&self, vertex: VertexId) -> VertexId {
        let mut current = vertex;
        while let Some(previous) = self[current].previous {
            current = previous;
        }
        current
    }

    /// The last vertex in the chain containing `vertex`.
    pub fn last(&self, vertex: VertexId) -> VertexId {
        let mut current = vertex;
        while let Some(next) = self[current].next {
            current = next;
        }
        current
    }

    /// All vertices strictly before `vertex` in its chain, nearest first.
    pub fn before(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut out = Vec::new();
        let mut current = self[vertex].previous;
        while let Some(previous) = current {
            out.push(previous);
            current = self[previous].previous;
        }
        out
    }

    /// All vertices strictly after `vertex` in its chain, nearest first.
    pub fn after(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut out = Vec::new();
        let mut current = self[vertex].next;
        while let Some(next) = current {
            out.push(next);
            current = self[next].next;
        }
        out
    }

    /// Returns true if `vertex` sits strictly before `other` in the chain.
    /// False when the two are equal or in different chains.
    pub fn is_before(&self, vertex: VertexId, other: VertexId) -> bool {
        let mut current = self[vertex].next;
        while let Some(next) = current {
            if next == other {
                return true;
            }
            current = self[next].next;
        }
        false
    }

    /// Returns true if `vertex` sits strictly after `other` in the chain.
    pub fn is_after(&self, vertex: VertexId, other: VertexId) -> bool {
        let mut current = self[vertex].previous;
        while let Some(previous) = current {
            if previous == other {
                return true;
            }
            current = self[previous].previous;
        }
        false
    }

    /// Iterator over the chain containing the first-created vertex, from its
    /// head to its tail. Empty on an empty graph.
    pub fn chain(&self) -> ChainIter<'_, V, E> {
        let cursor = self.vertices.first().map(|head| self.first(head.id()));
        ChainIter { graph: self, cursor }
    }

    /// Iterator over the chain from `start` (inclusive) to the tail.
    pub fn chain_from(&self, start: VertexId) -> ChainIter<'_, V, E> {
        ChainIter {
            graph: self,
            cursor: Some(start),
        }
    }
}

/// Forward iterator over a chain, following `next` pointers.
pub struct ChainIter<'a, V, E> {
    graph: &'a Graph<V, E>,
    cursor: Option<VertexId>,
}

impl<'a, V, E> Iterator for ChainIter<'a, V, E> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let id = self.cursor?;
        self.cursor = self.graph[id].next;
        Some(id)
    }
}
