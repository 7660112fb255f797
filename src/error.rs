//! Error types for topological sorting.
//!
//! Every failure surfaces at the single call boundary. Nothing is retried and no
//! partial ordering is handed back: a call either returns a complete order or
//! one of these errors.

use thiserror::Error;

/// Result alias for sorting operations over vertices of type `V`.
pub type Result<T, V> = std::result::Result<T, SortError<V>>;

/// Errors produced while adapting edge sources or scheduling vertices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortError<V> {
    /// The edge descriptor is neither a positional sequence, a lookup, nor a producer.
    #[error("invalid edge relation: {reason}")]
    InvalidInput {
        /// What was wrong with the descriptor.
        reason: String,
    },

    /// A producer-style edge source could not yield a cursor.
    #[error("edge producer has no cursor to resume")]
    UnsupportedEdgeSource,

    /// A positional or producer edge source ran out before the vertex walk did.
    #[error("edge relation has no edge set for the vertex at position {position}")]
    EdgeSetMissing {
        /// Zero-based position of the vertex in the input walk.
        position: usize,
    },

    /// The same vertex was enumerated more than once.
    #[error("vertex at position {position} was already enumerated")]
    DuplicateVertex {
        /// The repeated vertex.
        vertex: V,
        /// Zero-based position of the repeated occurrence.
        position: usize,
    },

    /// An edge names a vertex that was never enumerated and dangling edges are rejected.
    #[error("an edge names a vertex that is not part of the input")]
    UnknownVertex {
        /// The dangling neighbour.
        vertex: V,
    },

    /// The frontier emptied before every vertex was output.
    #[error("graph contains a cycle; {} vertices could not be ordered", .unresolved.len())]
    CyclicGraph {
        /// Vertices left with unresolved prerequisites, in input order.
        unresolved: Vec<V>,
    },
}

impl<V> SortError<V> {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a cycle error carrying the unresolved vertices.
    pub fn cycle(unresolved: Vec<V>) -> Self {
        Self::CyclicGraph { unresolved }
    }

    /// Returns true if this error reports a cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CyclicGraph { .. })
    }

    /// Vertices left unordered by a cycle, if this is a cycle error.
    pub fn unresolved(&self) -> Option<&[V]> {
        match self {
            Self::CyclicGraph { unresolved } => Some(unresolved),
            _ => None,
        }
    }
}
