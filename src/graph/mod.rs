//! The graph: arena storage plus the checked building surface.
//!
//! [`Graph`] owns the vertex and edge tables and exposes two method tiers:
//!
//! - The **checked building tier** in this module (`add_vertex`, `add_edge`,
//!   `available_edges`, `traverse`, `clear`): the only entry points that
//!   enforce cycle safety. Acyclicity and the reflow contract hold for every
//!   structure mutated exclusively through this tier.
//! - The **low-level tier** in the `chain`, `links` and `reflow` submodules:
//!   chain splicing, raw connection, and structural queries. These are
//!   public for advanced and test use but perform no cycle checks; their
//!   documented preconditions are the caller's responsibility.
//!
//! Vertices and edges are slots in growable tables addressed by
//! [`VertexId`]/[`EdgeId`]; chain neighbours and edge endpoints are id
//! fields, which keeps the mutually-referencing mesh free of ownership
//! cycles while preserving O(1) neighbour access.

mod chain;
mod invariants;
mod links;
mod reflow;

pub use chain::ChainIter;

use crate::debug_invariants::DebugInvariants;
use crate::edge::{Edge, EdgeId, ProtoEdge};
use crate::error::GraphError;
use crate::vertex::{Vertex, VertexId};
use std::ops::Index;


/// A directed acyclic graph whose vertices also form a single linear chain.
///
/// `vertices` and `edges` are kept in creation order; a slot index is the
/// id, so the n-th vertex added has id `n - 1`. Creation order is *not*
/// necessarily chain order once edges or [`Graph::reflow`] have moved
/// vertices around.
///
/// # Type Parameters
/// - `V`: per-vertex client payload. Defaults to `()`.
/// - `E`: per-edge client payload. Defaults to `()`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Graph<V = (), E = ()> {
    pub(crate) vertices: Vec<Vertex<V>>,
    pub(crate) edges: Vec<Edge<E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// All vertices, indexed by creation order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<V>] {
        &self.vertices
    }

    /// All edges, indexed by creation order.
    #[inline]
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    /// The vertex addressed by `id`, if it belongs to this graph.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(id.index())
    }

    /// Mutable access to the vertex addressed by `id`.
    ///
    /// Structural fields are crate-private, so this only opens the `content`
    /// payload for mutation.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(id.index())
    }

    /// The edge addressed by `id`, if it belongs to this graph.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.index())
    }

    /// Mutable access to the edge addressed by `id` (payload only).
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<E>> {
        self.edges.get_mut(id.index())
    }

    /// Adds a new vertex at the tail of the chain and connects each vertex in
    /// `dependencies` to it.
    ///
    /// The vertex id is the next slot index; each dependency connection is an
    /// edge `dependency -> new` created with `E::default()` content and the
    /// next sequential edge id.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if a dependency id is not in this graph,
    /// [`GraphError::DuplicateConnection`] if the same dependency is passed
    /// twice. Connection is not atomic: on failure the vertex is already in
    /// the chain and the table, with a prefix of its dependency edges created
    /// (callers requiring atomicity must snapshot and roll back externally).
    ///
    /// # Example
    /// ```rust
    /// use dag_chain::prelude::*;
    /// let mut g: Graph = Graph::new();
    /// let a = g.add_vertex((), &[]).unwrap();
    /// let b = g.add_vertex((), &[a]).unwrap();
    /// assert_eq!(b.get(), 1);
    /// assert_eq!(g.edges().len(), 1);
    /// ```
    pub fn add_vertex(&mut self, content: V, dependencies: &[VertexId]) -> Result<VertexId, GraphError>
    where
        E: Default,
    {
        let id = VertexId::from_index(self.vertices.len());
        let tail = self.vertices.first().map(|head| self.last(head.id()));
        self.vertices.push(Vertex::new(id, content));
        if let Some(tail) = tail {
            self.insert_after(tail, id);
        }
        for &dependency in dependencies {
            self.connect(dependency, id, E::default())?;
        }
        self.debug_assert_invariants();
        Ok(id)
    }

    /// Adds a new edge `top -> bottom` after checking it against
    /// [`Graph::available_connections`].
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either id is not in this graph;
    /// [`GraphError::CircularConnection`] if the pair is not an available
    /// connection (it would create a cycle, or duplicates an existing edge).
    /// No mutation occurs on either failure.
    pub fn add_edge(&mut self, top: VertexId, bottom: VertexId, content: E) -> Result<EdgeId, GraphError> {
        if self.vertex(top).is_none() {
            return Err(GraphError::UnknownVertex(top));
        }
        if self.vertex(bottom).is_none() {
            return Err(GraphError::UnknownVertex(bottom));
        }
        let legal = self
            .available_connections(top)
            .iter()
            .any(|proto| proto.bottom == bottom);
        if !legal {
            return Err(GraphError::CircularConnection { top, bottom });
        }
        let edge = self.connect(top, bottom, content)?;
        self.debug_assert_invariants();
        Ok(edge)
    }

    /// Every edge that could legally be added to the graph right now: the
    /// concatenation of [`Graph::available_connections`] over all vertices in
    /// creation order.
    pub fn available_edges(&self) -> Vec<ProtoEdge> {
        self.vertices
            .iter()
            .flat_map(|v| self.available_connections(v.id()))
            .collect()
    }

    /// Visits the chain in order, starting from the head of the chain that
    /// contains the first-created vertex, calling `visit(vertex, index)` with
    /// a zero-based visitation index. Stops early when `visit` returns
    /// `true`. No-op on an empty graph.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&Vertex<V>, usize) -> bool,
    {
        for (index, id) in self.chain().enumerate() {
            if visit(&self[id], index) {
                return;
            }
        }
    }

    /// Resets both tables to empty.
    ///
    /// Previously issued ids are orphaned: they no longer address anything in
    /// this graph and will be reissued to new vertices and edges.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing graph: {} vertices, {} edges",
            self.vertices.len(),
            self.edges.len()
        );
        self.vertices.clear();
        self.edges.clear();
    }
}

impl<V, E> Index<VertexId> for Graph<V, E> {
    type Output = Vertex<V>;

    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    fn index(&self, id: VertexId) -> &Vertex<V> {
        &self.vertices[id.index()]
    }
}

impl<V, E> Index<EdgeId> for Graph<V, E> {
    type Output = Edge<E>;

    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    fn index(&self, id: EdgeId) -> &Edge<E> {
        &self.edges[id.index()]
    }
}
