//! # dag-chain
//!
//! dag-chain is an in-memory library for building and maintaining a directed
//! acyclic graph (DAG) whose vertices simultaneously form a single total
//! order, the *chain* (a presentation/traversal sequence). Clients add
//! vertices, connect them with directed edges, and query ancestry and
//! descendancy; the library guarantees that no checked edge addition creates
//! a cycle, and the chain can be repaired on demand ([`graph::Graph::reflow`])
//! to stay consistent with the partial order induced by the edges.
//!
//! ## Features
//! - Arena-backed vertex and edge storage addressed by [`vertex::VertexId`]
//!   and [`edge::EdgeId`] index handles
//! - Doubly-linked chain primitives (`insert_before`, `insert_after`,
//!   `unlink`) with mirror-consistency invariants
//! - Uplink/downlink edge bookkeeping with duplicate and cycle rejection
//! - Pre-order ancestry walks (`above`, `below`) and cycle-safe connection
//!   enumeration (`available_connections`)
//! - Local order repair (`reflow`) that pulls dependencies ahead of their
//!   dependents and propagates the fix upward
//! - Invariant validation via [`DebugInvariants`], enabled in debug builds or
//!   with the `strict-invariants`/`check-invariants` features
//!
//! ## Example
//! ```rust
//! use dag_chain::prelude::*;
//!
//! let mut g: Graph = Graph::new();
//! let a = g.add_vertex((), &[]).unwrap();
//! let b = g.add_vertex((), &[a]).unwrap();
//!
//! // `a` is an ancestor of `b`, so connecting b -> a would close a loop.
//! assert!(g.is_above(b, a));
//! assert!(matches!(
//!     g.add_edge(b, a, ()),
//!     Err(GraphError::CircularConnection { .. })
//! ));
//! ```
//!
//! ## Determinism
//! All walks are deterministic: chain walks follow the linked order, ancestry
//! walks follow edge-creation order. There is no hashing-dependent iteration
//! in any public result.

pub mod debug_invariants;
pub mod edge;
pub mod error;
pub mod graph;
pub mod vertex;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::edge::{Edge, EdgeId, ProtoEdge};
    pub use crate::error::GraphError;
    pub use crate::graph::{ChainIter, Graph};
    pub use crate::vertex::{Vertex, VertexId};
}
