//! Debug-time validation of structural invariants.
//!
//! The low-level chain and connection primitives are deliberately unchecked
//! (see the module docs on [`crate::graph`]), so a misused sequence of calls
//! can corrupt the chain mirrors or introduce a cycle. This module provides
//! the hook used to catch that early: the checked building tier asserts the
//! full invariant set after every mutation in debug builds, and the same
//! checks can be kept in release builds with the `strict-invariants` or
//! `check-invariants` features.

use crate::error::GraphError;

/// Trait for validating structural invariants of the chain and link relation.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is
    /// enabled; no-op otherwise.
    fn debug_assert_invariants(&self);

    /// Validate invariants unconditionally and return the first violation
    /// encountered.
    ///
    /// For a graph this checks, in order: chain mirror consistency, chain
    /// termination, edge mirror presence, absence of parallel edges, and
    /// acyclicity of the link relation.
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Runs a fallible invariant check and panics on violation when invariant
/// checking is enabled, tagging the panic with the operation that just ran.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
