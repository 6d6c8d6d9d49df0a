//! Path reconstruction from shortest-path results.

use bit_set::BitSet;
use num_traits::NumCast;

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, Id, IndexType, VertexId, Weight};
use super::floyd_warshall::DistanceMatrix;
use super::result::ShortestPaths;


/// Follow predecessor links from `end` back to the query's source.
///
/// Returns the vertices of a shortest path in order, source first and `end`
/// last; a path to the source itself is just `[source]`.  Returns `None` if
/// `end` is unreachable, or if the predecessor chain loops without reaching
/// the source (possible only after a negative cycle was found).
pub fn reconstruct_path<W, Ix>(paths: &ShortestPaths<W, Ix>, end: VertexId<Ix>)
                               -> Result<Option<Vec<VertexId<Ix>>>>
    where W: Weight, Ix: IndexType
{
    let n = paths.vertex_count();
    if end.index() >= n {
        return Err(Error::UnknownVertex(end.index()));
    }

    let source = paths.source();
    let predecessors = paths.predecessors();
    let mut path = vec![end];
    let mut current = end;
    while current != source {
        match predecessors[current.index()] {
            None => return Ok(None),
            Some(p) => {
                if path.len() > n {
                    return Ok(None);
                }
                path.push(p);
                current = p;
            }
        }
    }
    path.reverse();
    Ok(Some(path))
}


/// Rebuild the edges of a shortest `start → end` path from an all-pairs
/// distance matrix.
///
/// Searches backward from `end` over *tight* edges only: an incoming edge
/// `u → current` is tight when its weight accounts exactly for the difference
/// between `D[start][current]` and `D[start][u]`.  Every edge of a shortest
/// path is tight, so the depth-first search reaches `start` whenever `end` is
/// reachable; dead ends (possible around zero-weight cycles) are backed out
/// of, and no vertex is entered twice.  `graph` must be the (unmodified)
/// graph the matrix was computed from.
///
/// Returns the edge ids in path order, an empty path when `start == end`,
/// and `None` when `end` is unreachable or no chain of tight edges leads back
/// to `start`.  The latter happens when the graph has a negative cycle, or
/// when catastrophic rounding (adding and cancelling weights of very
/// different magnitudes) leaves a matrix entry that no single edge accounts
/// for within tolerance.
pub fn reconstruct_edge_path<L, W, Ix>(graph: &Graph<L, W, Ix>,
                                       matrix: &DistanceMatrix<W, Ix>,
                                       start: VertexId<Ix>,
                                       end: VertexId<Ix>) -> Result<Option<Vec<EdgeId<Ix>>>>
    where W: Weight, Ix: IndexType
{
    let n = matrix.vertex_count();
    for v in [start, end] {
        graph.check_vertex(v)?;
        if v.index() >= n {
            return Err(Error::UnknownVertex(v.index()));
        }
    }

    let s = start.index();
    if ! matrix.get(s, end.index()).is_finite() {
        return Ok(None);
    }
    if start == end {
        return Ok(Some(Vec::new()));
    }

    let mut visited = BitSet::with_capacity(n);
    visited.insert(end.index());

    // `edges[i]` leads into the vertex of `stack[i]`.
    let mut stack = vec![(end, graph.incoming(end))];
    let mut edges = Vec::new();
    loop {
        let step = match stack.last_mut() {
            None => return Ok(None),
            Some((current, candidates)) => {
                let d_current = matrix.get(s, current.index());
                candidates.find(|e| {
                    let u = e.source().index();
                    if u >= n || visited.contains(u) {
                        return false;
                    }
                    let d_u = matrix.get(s, u);
                    d_u.is_finite() && nearly_equal(d_u + e.weight(), d_current)
                })
            }
        };

        match step {
            Some(e) => {
                edges.push(e.id());
                let u = e.source();
                if u == start {
                    edges.reverse();
                    return Ok(Some(edges));
                }
                visited.insert(u.index());
                stack.push((u, graph.incoming(u)));
            },
            None => {
                // Dead end: every tight edge into this vertex is exhausted.
                stack.pop();
                edges.pop();
            }
        }
    }
}

/// Compare two path lengths, allowing for rounding in sums that were
/// associated differently.
fn nearly_equal<W: Weight>(a: W, b: W) -> bool {
    if a == b {
        return true;
    }
    let ulps: W = NumCast::from(16).unwrap_or_else(W::one);
    let scale = a.abs().max(b.abs()).max(W::one());
    (a - b).abs() <= W::epsilon() * scale * ulps
}
