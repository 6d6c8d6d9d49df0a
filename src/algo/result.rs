//! Per-query result of the single-source shortest-path engines.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{DefaultIndexType, Id, IndexType, VertexId, Weight};
use super::path::reconstruct_path;

/// Distances and predecessors computed from a single source vertex.
///
/// Both maps are indexed by vertex index and cover exactly the vertices that
/// existed when the query ran.  A vertex that cannot be reached from the
/// source has distance `+∞` and no predecessor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPaths<W, Ix: IndexType = DefaultIndexType> {
    source: VertexId<Ix>,
    distances: Vec<W>,
    predecessors: Vec<Option<VertexId<Ix>>>,
    negative_cycle: bool,
    cycle: Vec<VertexId<Ix>>
}

impl<W: Weight, Ix: IndexType> ShortestPaths<W, Ix> {
    /// Fresh state for a query over `n` vertices: everything unreachable
    /// except the source, at distance zero.
    pub(crate) fn new(source: VertexId<Ix>, n: usize) -> Self {
        let mut distances = vec![W::infinity(); n];
        distances[source.index()] = W::zero();
        ShortestPaths{source,
                      distances,
                      predecessors: vec![None; n],
                      negative_cycle: false,
                      cycle: Vec::new()}
    }

    /// The vertex the query started from.
    #[inline]
    pub fn source(&self) -> VertexId<Ix> {
        self.source
    }

    /// Number of vertices covered by the result.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    fn check(&self, v: VertexId<Ix>) -> Result<usize> {
        let i = v.index();
        if i < self.distances.len() {
            Ok(i)
        } else {
            Err(Error::UnknownVertex(i))
        }
    }

    /// Length of the shortest path from the source to `v`; `+∞` if `v` is
    /// unreachable.
    pub fn distance(&self, v: VertexId<Ix>) -> Result<W> {
        Ok(self.distances[self.check(v)?])
    }

    /// Every distance, indexed by vertex index.
    #[inline]
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Check whether some path leads from the source to `v`.
    ///
    /// Returns `false` for vertices unknown to the result.
    pub fn is_reachable(&self, v: VertexId<Ix>) -> bool {
        self.distances.get(v.index()).map_or(false, |d| d.is_finite())
    }

    /// Vertex preceding `v` on its shortest path, or `None` for the source and
    /// for unreachable vertices.
    pub fn predecessor(&self, v: VertexId<Ix>) -> Result<Option<VertexId<Ix>>> {
        Ok(self.predecessors[self.check(v)?])
    }

    /// Every predecessor, indexed by vertex index.
    #[inline]
    pub fn predecessors(&self) -> &[Option<VertexId<Ix>>] {
        &self.predecessors
    }

    /// Whether the query found a negative-weight cycle reachable from the
    /// source.
    ///
    /// When this is true, distances of vertices reachable through the cycle
    /// are meaningless.  Only `bellman_ford` checks for negative cycles.
    #[inline]
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Vertices of one negative-weight cycle, in edge order: each vertex has
    /// an edge to the next, and the last has an edge back to the first.
    ///
    /// `None` when no cycle was found, and also in the rare case where
    /// `has_negative_cycle` is true but no witness could be isolated.
    pub fn negative_cycle(&self) -> Option<&[VertexId<Ix>]> {
        if self.negative_cycle && ! self.cycle.is_empty() {
            Some(&self.cycle)
        } else {
            None
        }
    }

    /// Shortest path from the source to `end`, both included.
    ///
    /// See [`reconstruct_path`](fn.reconstruct_path.html).
    pub fn path_to(&self, end: VertexId<Ix>) -> Result<Option<Vec<VertexId<Ix>>>> {
        reconstruct_path(self, end)
    }

    // --------------------------------
    // Engine-side mutation

    /// Relax the edge `u → v` of weight `w`: if going through `u` shortens
    /// the best known path to `v`, record the shorter path and return true.
    #[inline]
    pub(crate) fn relax(&mut self, u: VertexId<Ix>, v: VertexId<Ix>, w: W) -> bool {
        if self.can_relax(u, v, w) {
            self.distances[v.index()] = self.distances[u.index()] + w;
            self.predecessors[v.index()] = Some(u);
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn can_relax(&self, u: VertexId<Ix>, v: VertexId<Ix>, w: W) -> bool {
        let du = self.distances[u.index()];
        du.is_finite() && du + w < self.distances[v.index()]
    }

    #[inline]
    pub(crate) fn distance_at(&self, v: VertexId<Ix>) -> W {
        self.distances[v.index()]
    }

    pub(crate) fn set_negative_cycle(&mut self, cycle: Vec<VertexId<Ix>>) {
        self.negative_cycle = true;
        self.cycle = cycle;
    }
}
