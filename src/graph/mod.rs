//! Weighted directed graph store.
//!
//! The store is an adjacency list with integer-based ids, in the manner of
//! the `petgraph` crate, except that each vertex keeps space-optimized vectors
//! of both its outgoing *and* its incoming edges.  Forward iteration serves
//! the single-source engines; backward iteration serves path reconstruction
//! over an all-pairs distance matrix.
//!
//! Vertices carry an opaque label and no algorithmic state.  Distances,
//! predecessors and the like live in the per-query result objects produced
//! by the [`algo`](../algo/) engines, so a single graph can answer any number
//! of queries without being reset.

mod common;
pub mod interface;
pub mod iter;
pub mod visit;
pub mod weighted;

pub use self::common::{DefaultIndexType, EdgeId, Graph, VertexId};
pub use self::interface::{Id, IndexType, Weight};
pub use self::iter::{AllEdges, EdgeRef, EdgeRefs, Indices};
pub use self::visit::{Control, Visitor};
pub use self::weighted::{Edge, Vertex};
