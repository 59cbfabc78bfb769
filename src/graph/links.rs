//! Edge bookkeeping and ancestry queries.
//!
//! A connection `top -> bottom` is recorded in three places: the edge table
//! and the two endpoint link lists (`top.downlinks`, `bottom.uplinks`).
//! [`Graph::connect`] is the single writer for all three, so the mirror
//! invariant is maintained in one place; it rejects duplicates but performs
//! **no cycle check**. Cycle safety is the caller's responsibility, normally
//! discharged by going through [`Graph::add_edge`], which consults
//! [`Graph::available_connections`] first.
//!
//! The ancestry walks (`above`, `below`) are pre-order depth-first multiset
//! walks: a parent is emitted immediately before its own parents are walked,
//! and a vertex reachable along several paths appears once per path. The
//! membership tests (`is_above`, `is_below`) are equivalent to membership in
//! those walks but deduplicate internally so diamond-heavy graphs stay
//! linear. All walks assume an acyclic link relation; on a structure
//! corrupted through `connect` they may not terminate (use
//! [`crate::DebugInvariants::validate_invariants`] to detect corruption).

use crate::edge::{Edge, EdgeId, ProtoEdge};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::vertex::VertexId;
use std::collections::HashSet;

impl<V, E> Graph<V, E> {
    /// Connects `top` to `bottom`, returning the id of the new edge.
    ///
    /// The edge is pushed onto `top`'s downlinks and `bottom`'s uplinks and
    /// assigned the next sequential edge id. Performs no cycle check; an
    /// acyclicity-violating call leaves the graph in a state the ancestry
    /// walks cannot handle.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not in this graph;
    /// [`GraphError::DuplicateConnection`] if a direct `top -> bottom` edge
    /// already exists (the edge table is unchanged by the failed call).
    pub fn connect(&mut self, top: VertexId, bottom: VertexId, content: E) -> Result<EdgeId, GraphError> {
        if self.vertex(top).is_none() {
            return Err(GraphError::UnknownVertex(top));
        }
        if self.vertex(bottom).is_none() {
            return Err(GraphError::UnknownVertex(bottom));
        }
        if self.has_edge(top, bottom) {
            return Err(GraphError::DuplicateConnection { top, bottom });
        }
        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge {
            id,
            top,
            bottom,
            content,
        });
        self.vertices[top.index()].downlinks.push(id);
        self.vertices[bottom.index()].uplinks.push(id);
        Ok(id)
    }

    /// Returns true if a direct edge `top -> bottom` exists.
    pub fn has_edge(&self, top: VertexId, bottom: VertexId) -> bool {
        self[top].downlinks.iter().any(|&e| self[e].bottom == bottom)
    }

    /// The `top` vertex of each uplink of `vertex`, in edge-creation order.
    pub fn directly_above(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self[vertex].uplinks.iter().map(move |&e| self[e].top)
    }

    /// The `bottom` vertex of each downlink of `vertex`, in edge-creation
    /// order.
    pub fn directly_below(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self[vertex].downlinks.iter().map(move |&e| self[e].bottom)
    }

    /// Number of uplinks (in-degree) of `vertex`.
    #[inline]
    pub fn uplink_count(&self, vertex: VertexId) -> usize {
        self[vertex].uplinks.len()
    }

    /// Number of downlinks (out-degree) of `vertex`.
    #[inline]
    pub fn downlink_count(&self, vertex: VertexId) -> usize {
        self[vertex].downlinks.len()
    }

    /// All vertices that connect directly or indirectly *to* `vertex`
    /// (ancestors), as a pre-order depth-first multiset walk over
    /// [`Graph::directly_above`].
    pub fn above(&self, vertex: VertexId) -> Vec<VertexId> {
        self.walk(vertex, Direction::Up)
    }

    /// All vertices `vertex` connects to directly or indirectly
    /// (descendants), as a pre-order depth-first multiset walk over
    /// [`Graph::directly_below`].
    pub fn below(&self, vertex: VertexId) -> Vec<VertexId> {
        self.walk(vertex, Direction::Down)
    }

    /// Returns true if `other` is a direct or transitive uplink (ancestor)
    /// of `vertex`. A vertex is never above itself.
    pub fn is_above(&self, vertex: VertexId, other: VertexId) -> bool {
        self.reaches(vertex, other, Direction::Up)
    }

    /// Returns true if `other` is a direct or transitive downlink
    /// (descendant) of `vertex`. A vertex is never below itself.
    pub fn is_below(&self, vertex: VertexId, other: VertexId) -> bool {
        self.reaches(vertex, other, Direction::Down)
    }

    /// Every connection `vertex -> candidate` that could be created without
    /// introducing a cycle or duplicating an existing edge.
    ///
    /// Candidates are drawn from the entire chain containing `vertex`, in
    /// chain order. A candidate is excluded when it is `vertex` itself, when
    /// `vertex` is already transitively below it (connecting would close a
    /// loop), or when a direct edge to it already exists.
    pub fn available_connections(&self, vertex: VertexId) -> Vec<ProtoEdge> {
        let mut protos = Vec::new();
        let mut cursor = Some(self.first(vertex));
        while let Some(candidate) = cursor {
            if candidate != vertex
                && !self.is_below(candidate, vertex)
                && !self.has_edge(vertex, candidate)
            {
                protos.push(ProtoEdge {
                    top: vertex,
                    bottom: candidate,
                });
            }
            cursor = self[candidate].next;
        }
        protos
    }

    fn neighbours(&self, vertex: VertexId, direction: Direction) -> Vec<VertexId> {
        match direction {
            Direction::Up => self.directly_above(vertex).collect(),
            Direction::Down => self.directly_below(vertex).collect(),
        }
    }

    fn walk(&self, vertex: VertexId, direction: Direction) -> Vec<VertexId> {
        let mut order = Vec::new();
        let mut stack = self.neighbours(vertex, direction);
        stack.reverse();
        while let Some(current) = stack.pop() {
            order.push(current);
            let next = self.neighbours(current, direction);
            stack.extend(next.into_iter().rev());
        }
        order
    }

    fn reaches(&self, vertex: VertexId, target: VertexId, direction: Direction) -> bool {
        if vertex == target {
            return false;
        }
        let mut stack = self.neighbours(vertex, direction);
        let mut seen: HashSet<VertexId> = stack.iter().copied().collect();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            for neighbour in self.neighbours(current, direction) {
                if seen.insert(neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        false
    }
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Up,
    Down,
}
