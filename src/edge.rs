//! Edge: a directed connection between two vertices, with payload.
//!
//! An edge records a dependency relation from its `top` vertex to its
//! `bottom` vertex (the dependent). It is conceptually owned jointly by the
//! `top`'s downlink list and the `bottom`'s uplink list; its endpoints are
//! never mutated after creation. `ProtoEdge` is the candidate form of an
//! edge, produced by connection enumeration before anything is written.

use crate::vertex::VertexId;
use std::fmt;

/// Identifier of an edge: its slot index in the owning graph's edge table.
///
/// Assigned in creation order, never reused.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Creates an `EdgeId` from a raw slot index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        EdgeId(raw)
    }

    /// Returns the raw index value of this `EdgeId`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        EdgeId(index as u32)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeId").field(&self.0).finish()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed connection from `top` to `bottom` carrying an arbitrary
/// `content` payload.
///
/// Endpoints and id are read-only after creation; only the payload is open
/// for mutation (via [`crate::graph::Graph::edge_mut`]).
///
/// # Type Parameters
/// - `E`: the per-edge payload type. Defaults to `()` for payload-free edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edge<E = ()> {
    pub(crate) id: EdgeId,
    pub(crate) top: VertexId,
    pub(crate) bottom: VertexId,
    /// User-defined payload attached to this connection.
    pub content: E,
}

impl<E> Edge<E> {
    /// The unique id of this edge.
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The vertex at the top of this edge (source of the dependency).
    #[inline]
    pub fn top(&self) -> VertexId {
        self.top
    }

    /// The vertex at the bottom of this edge (the dependent).
    #[inline]
    pub fn bottom(&self) -> VertexId {
        self.bottom
    }

    /// Returns the `(top, bottom)` endpoints, dropping the payload.
    #[inline]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.top, self.bottom)
    }
}

/// A possible connection between two vertices: an edge that could be created
/// without introducing a cycle or duplicating an existing edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ProtoEdge {
    /// The vertex that would sit at the top of the edge.
    pub top: VertexId,
    /// The vertex that would sit at the bottom of the edge.
    pub bottom: VertexId,
}
