//! Error types for graph construction and queries.
//!
//! Only caller mistakes are errors.  A negative-weight cycle or a missing
//! path is an expected outcome of a query and is reported through the
//! query's result object instead: see
//! [`ShortestPaths::has_negative_cycle`](../algo/struct.ShortestPaths.html#method.has_negative_cycle),
//! [`DistanceMatrix::has_negative_cycle`](../algo/struct.DistanceMatrix.html#method.has_negative_cycle),
//! and the `Option` returned by the path-reconstruction functions.

use thiserror::Error;

/// Errors raised by graph construction and queries.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// An edge between the same ordered pair of vertices already exists.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Index of the edge's source vertex.
        from: usize,
        /// Index of the edge's target vertex.
        to: usize,
    },

    /// A vertex id does not refer to a vertex of the graph (or of the graph
    /// a result was computed from).
    #[error("unknown vertex {0}")]
    UnknownVertex(usize),

    /// Edge weights must be finite real numbers.
    #[error("edge weight must be finite, got {0}")]
    NonFiniteWeight(f64),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
