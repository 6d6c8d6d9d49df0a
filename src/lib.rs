#![warn(missing_docs)]

//! Shortest-path and spanning-tree algorithms over weighted directed graphs.
//!
//! A caller builds a [`Graph`](graph/struct.Graph.html), then runs one of
//! the engines in [`algo`](algo/) against it:
//!
//!   * [`dijkstra`](algo/fn.dijkstra.html) for single-source shortest paths
//!     under non-negative weights,
//!   * [`bellman_ford`](algo/fn.bellman_ford.html) for single-source shortest
//!     paths under arbitrary weights, with negative-cycle detection,
//!   * [`floyd_warshall`](algo/fn.floyd_warshall.html) for all-pairs shortest
//!     paths, and
//!   * [`minimum_spanning_tree`](algo/fn.minimum_spanning_tree.html) for
//!     Kruskal's minimum spanning forest.
//!
//! ```rust
//! use wgraph::{Graph, dijkstra};
//!
//! # fn main() -> wgraph::Result<()> {
//! let mut g = Graph::<&str, f64>::new();
//! let a = g.add_vertex("A");
//! let b = g.add_vertex("B");
//! let c = g.add_vertex("C");
//! g.add_edge(a, b, 1.0)?;
//! g.add_edge(b, c, 2.0)?;
//! g.add_edge(a, c, 4.0)?;
//!
//! let paths = dijkstra(&g, a)?;
//! assert_eq!(3.0, paths.distance(c)?);
//! assert_eq!(Some(vec![a, b, c]), paths.path_to(c)?);
//! # Ok(())
//! # }
//! ```
//!
//! Engines never mutate the graph; all per-query state (distances,
//! predecessors, union-find forests) is owned by the call that creates it.

#[macro_use]
pub mod util;

pub mod error;
pub mod graph;
pub mod algo;

pub use error::{Error, Result};
pub use graph::{Graph, VertexId, EdgeId, EdgeRef, Weight, Control, Visitor};
pub use algo::{dijkstra, dijkstra_with, bellman_ford, floyd_warshall, minimum_spanning_tree};
pub use algo::{reconstruct_path, reconstruct_edge_path};
pub use algo::{ShortestPaths, DistanceMatrix, SpanningForest};
