//! GraphError: unified error type for dag-chain public APIs.
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all fallible operations. The two
//! connection errors (`DuplicateConnection`, `CircularConnection`) are the
//! only failures the building surface can produce; the remaining variants are
//! reported by [`crate::DebugInvariants::validate_invariants`] when a
//! structure mutated through the low-level tier has been corrupted.

use crate::edge::EdgeId;
use crate::vertex::VertexId;
use thiserror::Error;

/// Unified error type for dag-chain operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A direct edge between the same ordered `(top, bottom)` pair already
    /// exists.
    #[error("vertex {top} is already connected to vertex {bottom}")]
    DuplicateConnection { top: VertexId, bottom: VertexId },
    /// The requested edge is not among `top`'s available connections: it
    /// would create a cycle or duplicate an existing edge.
    #[error("unable to create edge {top} -> {bottom}: circular connection detected")]
    CircularConnection { top: VertexId, bottom: VertexId },
    /// The vertex id does not address a slot in this graph.
    #[error("vertex {0} does not belong to this graph")]
    UnknownVertex(VertexId),
    /// A chain neighbour does not point back at this vertex.
    #[error("chain link inconsistency at vertex {0}: neighbour does not point back")]
    BrokenChainLink(VertexId),
    /// A chain segment loops instead of terminating at a head/tail.
    #[error("chain containing vertex {0} is circular (expected a terminated chain)")]
    CircularChain(VertexId),
    /// An edge is missing from its `top` downlinks or `bottom` uplinks.
    #[error("edge {0} is missing from its endpoint link lists")]
    MissingEdgeMirror(EdgeId),
    /// The link relation contains a cycle; expected a DAG.
    #[error("cycle detected in link relation (expected DAG)")]
    CycleDetected,
}
