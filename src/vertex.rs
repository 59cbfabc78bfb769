//! `VertexId`: a strong, zero-cost handle for graph vertices, and
//! `Vertex`: the arena entry behind it.
//!
//! Every vertex is represented by an opaque index into the graph's vertex
//! table. `VertexId` wraps the slot index so chain neighbours and edge
//! endpoints can be stored as plain integer fields instead of references,
//! which keeps the shared, mutually-referencing structure (chain pointers
//! plus edge endpoints) free of ownership cycles.
//!
//! This module provides:
//! - A transparent `VertexId` newtype around `u32` for zero-cost storage.
//! - The `Vertex` record: chain pointers, uplink/downlink edge lists, and a
//!   client-owned `content` payload the core never inspects.

use crate::edge::EdgeId;
use std::fmt;

/// Identifier of a vertex: its slot index in the owning graph's vertex table.
///
/// Assigned once at creation, immutable, unique within a graph, and
/// monotonically increasing in creation order. Ids are never reused; after
/// [`crate::graph::Graph::clear`] previously issued ids are orphaned.
///
/// # Memory layout
/// `repr(transparent)` over a `u32`, so a `VertexId` costs exactly as much as
/// the raw index it wraps.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a `VertexId` from a raw slot index.
    ///
    /// Only ids previously issued by a graph address valid slots; fabricated
    /// ids are rejected by the checked tier ([`crate::error::GraphError::UnknownVertex`])
    /// and are a precondition violation for the low-level query tier.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        VertexId(raw)
    }

    /// Returns the raw index value of this `VertexId`.
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
        VertexId(index as u32)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

/// Prints the numeric id without any wrapper text.
impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex: simultaneously a link in the doubly-linked chain that defines
/// the total presentation order, and a node in the DAG with incoming
/// (*uplink*) and outgoing (*downlink*) edges.
///
/// Structural fields are crate-private; they are only ever mutated through
/// the owning [`crate::graph::Graph`], which maintains the mirror invariants
/// (`v.next.previous == v`, edges present in both endpoint lists). The
/// `content` payload is public and client-owned.
///
/// # Type Parameters
/// - `V`: the client payload type. Defaults to `()`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Vertex<V = ()> {
    pub(crate) id: VertexId,
    pub(crate) previous: Option<VertexId>,
    pub(crate) next: Option<VertexId>,
    pub(crate) uplinks: Vec<EdgeId>,
    pub(crate) downlinks: Vec<EdgeId>,
    /// Client-owned payload; never interpreted by the core.
    pub content: V,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, content: V) -> Self {
        Vertex {
            id,
            previous: None,
            next: None,
            uplinks: Vec::new(),
            downlinks: Vec::new(),
            content,
        }
    }

    /// The unique id of this vertex.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The previous vertex in the chain, if any.
    #[inline]
    pub fn previous(&self) -> Option<VertexId> {
        self.previous
    }

    /// The next vertex in the chain, if any.
    #[inline]
    pub fn next(&self) -> Option<VertexId> {
        self.next
    }

    /// Edges where this vertex is the `bottom`, in edge-creation order.
    #[inline]
    pub fn uplinks(&self) -> &[EdgeId] {
        &self.uplinks
    }

    /// Edges where this vertex is the `top`, in edge-creation order.
    #[inline]
    pub fn downlinks(&self) -> &[EdgeId] {
        &self.downlinks
    }
}

/// Human-readable tag containing the id, e.g. `Vertex [3]`.
impl<V> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex [{}]", self.id)
    }
}
