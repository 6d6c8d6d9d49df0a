//! Shortest-path and spanning-tree engines.
//!
//! Every engine borrows the graph immutably and returns an owned result:
//!
//!   * [`ShortestPaths`](struct.ShortestPaths.html) from the single-source
//!     engines, [`dijkstra`](fn.dijkstra.html) and
//!     [`bellman_ford`](fn.bellman_ford.html);
//!   * [`DistanceMatrix`](struct.DistanceMatrix.html) from
//!     [`floyd_warshall`](fn.floyd_warshall.html);
//!   * [`SpanningForest`](struct.SpanningForest.html) from
//!     [`minimum_spanning_tree`](fn.minimum_spanning_tree.html).
//!
//! Path reconstruction for the first two lives in
//! [`reconstruct_path`](fn.reconstruct_path.html) and
//! [`reconstruct_edge_path`](fn.reconstruct_edge_path.html).

mod path;
mod result;

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;

pub use self::bellman_ford::bellman_ford;
pub use self::dijkstra::{dijkstra, dijkstra_with};
pub use self::floyd_warshall::{floyd_warshall, DistanceMatrix};
pub use self::kruskal::{minimum_spanning_tree, EdgeWeight, SpanningForest};
pub use self::path::{reconstruct_edge_path, reconstruct_path};
pub use self::result::ShortestPaths;
