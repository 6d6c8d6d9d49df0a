//! Floyd-Warshall algorithm for all-pairs shortest paths.

use std::fmt;
use std::marker::PhantomData;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::{Error, Result};
use crate::graph::{DefaultIndexType, Graph, Id, IndexType, VertexId, Weight};

/// Dense `V × V` matrix of shortest-path distances.
///
/// Row and column `i` correspond to the vertex with index `i`, so the matrix
/// follows the graph's own vertex enumeration.  The vertex count is fixed
/// when the matrix is built; vertices added to the graph afterwards are not
/// covered.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix<W, Ix: IndexType = DefaultIndexType> {
    n: usize,
    data: Vec<W>,
    _ix: PhantomData<Ix>
}

impl<W: Weight, Ix: IndexType> DistanceMatrix<W, Ix> {
    /// Matrix for `n` vertices with no paths other than the empty ones.
    fn unconnected(n: usize) -> Self {
        let mut data = vec![W::infinity(); n * n];
        for i in 0..n {
            data[i * n + i] = W::zero();
        }
        DistanceMatrix{n, data, _ix: PhantomData}
    }

    /// Number of vertices covered (the matrix has this many rows and columns).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.  Panics if either is out of range.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> W {
        panic_unless!(i < self.n && j < self.n, "index ({}, {}) out of range for {}x{} distance matrix", i, j, self.n, self.n);
        self.data[i * self.n + j]
    }

    #[inline(always)]
    fn set(&mut self, i: usize, j: usize, w: W) {
        self.data[i * self.n + j] = w;
    }

    fn check(&self, v: VertexId<Ix>) -> Result<usize> {
        let i = v.index();
        if i < self.n {
            Ok(i)
        } else {
            Err(Error::UnknownVertex(i))
        }
    }

    /// Shortest distance from `from` to `to`; `+∞` if there is no path.
    pub fn distance(&self, from: VertexId<Ix>, to: VertexId<Ix>) -> Result<W> {
        Ok(self.get(self.check(from)?, self.check(to)?))
    }

    /// Distances from `from` to every vertex, indexed by vertex index.
    pub fn row(&self, from: VertexId<Ix>) -> Result<&[W]> {
        let i = self.check(from)?;
        Ok(&self.data[i * self.n..(i + 1) * self.n])
    }

    /// Iterate over the rows of the matrix, in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // `chunks` rejects a zero chunk size; an empty matrix has no rows.
        self.data.chunks(self.n.max(1))
    }

    /// Check whether the graph contains a negative-weight cycle.
    ///
    /// A vertex lies on (or can reach and be reached from) a negative cycle
    /// exactly when its diagonal entry ended up below zero.  Distances in the
    /// matrix are left uncorrected when this returns true.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|i| self.get(i, i) < W::zero())
    }

    /// Vertices whose diagonal entry is negative.
    pub fn negative_cycle_vertices(&self) -> Vec<VertexId<Ix>> {
        (0..self.n).filter(|&i| self.get(i, i) < W::zero()).map(VertexId::new).collect()
    }
}

impl<W: Weight, Ix: IndexType> fmt::Debug for DistanceMatrix<W, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<W: Weight + fmt::Display, Ix: IndexType> fmt::Display for DistanceMatrix<W, Ix> {
    /// One line per row, entries separated by spaces; `inf` marks a missing
    /// path.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().format(" "))?;
        }
        Ok(())
    }
}


/// Floyd-Warshall all-pairs shortest paths.
///
/// Starts from the direct edge weights (zero on the diagonal, `+∞` where no
/// edge exists) and, for each intermediate vertex `k` in turn, shortens every
/// `i → j` entry that is improved by going through `k`.  After step `k`, every
/// entry is the shortest distance using only vertices `0..=k` as
/// intermediates.
///
/// The graph must not contain a negative-weight cycle for the distances to be
/// meaningful; check [`DistanceMatrix::has_negative_cycle`](struct.DistanceMatrix.html#method.has_negative_cycle)
/// when that cannot be ruled out.
///
/// Time: O(V^3), Memory: O(V^2)
pub fn floyd_warshall<L, W, Ix>(graph: &Graph<L, W, Ix>) -> DistanceMatrix<W, Ix>
    where W: Weight, Ix: IndexType
{
    let n = graph.vertex_count();
    let _span = debug_span!("floyd_warshall", vertices = n, edges = graph.edge_count()).entered();

    let mut d = DistanceMatrix::unconnected(n);
    for e in graph.edges() {
        let (i, j) = (e.source().index(), e.target().index());
        // Only a negative self-loop can beat the diagonal's zero.
        if e.weight() < d.get(i, j) {
            d.set(i, j, e.weight());
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = d.get(i, k);
            if d_ik == W::infinity() {
                continue;
            }
            for j in 0..n {
                let d_kj = d.get(k, j);
                if d_kj == W::infinity() {
                    continue;
                }
                let through_k = d_ik + d_kj;
                if through_k < d.get(i, j) {
                    d.set(i, j, through_k);
                }
            }
        }
    }

    debug!(negative_cycle = d.has_negative_cycle(), "floyd-warshall finished");
    d
}
