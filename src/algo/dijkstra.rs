//! Dijkstra's algorithm for single-source shortest paths.
//!
//! Uses a binary-heap priority queue with lazy invalidation: instead of
//! decreasing a vertex's key, a relaxation pushes a fresh entry and entries
//! that no longer match their vertex's tentative distance are skipped as
//! they surface.

use bit_set::BitSet;
use tracing::{debug, debug_span, trace};

use crate::error::Result;
use crate::graph::{Control, Graph, Id, IndexType, VertexId, Visitor, Weight};
use crate::util::heap::{MinQueue, Priority};
use super::result::ShortestPaths;

/// Dijkstra's single-source shortest paths.
///
/// **Precondition: every edge weight must be non-negative.**  This is *not*
/// checked.  On a graph with negative edges the search still terminates, but
/// the distances and paths it reports may simply be wrong; use
/// [`bellman_ford`](fn.bellman_ford.html) whenever negative weights are
/// possible.
///
/// Among several shortest paths to a vertex, the one reported is whichever
/// the search finds first (ties between equally distant vertices are settled
/// lowest index first).
///
/// Fails with `Error::UnknownVertex` if `start` is not in the graph.
///
/// Time: O((V + E) log V)
pub fn dijkstra<L, W, Ix>(graph: &Graph<L, W, Ix>, start: VertexId<Ix>) -> Result<ShortestPaths<W, Ix>>
    where W: Weight, Ix: IndexType
{
    dijkstra_with(graph, start, |_: VertexId<Ix>, _: W| Control::Continue)
}

/// Dijkstra's algorithm, reporting each vertex to `visitor` as it is settled.
///
/// Vertices are settled in order of non-decreasing distance.  If the visitor
/// returns `Control::Break` the search stops immediately: vertices settled so
/// far (including the one just reported) have final distances, while the
/// rest keep whatever tentative distance they had reached.
///
/// ```rust
/// use wgraph::{Control, Graph, VertexId, dijkstra_with};
///
/// # fn main() -> wgraph::Result<()> {
/// let mut g = Graph::<u8, f64>::new();
/// let vs = g.add_vertices(0..4);
/// g.add_edges(&[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)])?;
///
/// // Stop as soon as vertex 2 is settled.
/// let mut order = Vec::new();
/// let paths = dijkstra_with(&g, vs[0], |v: VertexId<u32>, _: f64| {
///     order.push(v);
///     if v == vs[2] { Control::Break } else { Control::Continue }
/// })?;
/// assert_eq!(vec![vs[0], vs[1], vs[2]], order);
/// assert_eq!(2.0, paths.distance(vs[2])?);
/// # Ok(())
/// # }
/// ```
pub fn dijkstra_with<L, W, Ix, V>(graph: &Graph<L, W, Ix>, start: VertexId<Ix>, mut visitor: V)
                                  -> Result<ShortestPaths<W, Ix>>
    where W: Weight, Ix: IndexType, V: Visitor<W, Ix>
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let _span = debug_span!("dijkstra", source = start.index(), vertices = n).entered();

    let mut paths = ShortestPaths::new(start, n);
    let mut settled = BitSet::with_capacity(n);
    let mut queue = MinQueue::with_capacity(n);
    queue.push((Priority(W::zero()), start));

    while let Some((Priority(dist), u)) = queue.pop() {
        // Skip stale entries: `u` was settled, or re-queued at a shorter
        // distance, after this entry was pushed.
        if settled.contains(u.index()) || dist > paths.distance_at(u) {
            continue;
        }
        settled.insert(u.index());

        if visitor.settle(u, dist) == Control::Break {
            debug!(settled = settled.len(), "dijkstra stopped by visitor");
            return Ok(paths);
        }

        for e in graph.outgoing(u) {
            let v = e.target();
            if settled.contains(v.index()) {
                continue;
            }
            if paths.relax(u, v, e.weight()) {
                trace!(from = u.index(), to = v.index(), distance = ?paths.distance_at(v), "relaxed");
                queue.push((Priority(paths.distance_at(v)), v));
            }
        }
    }

    debug!(settled = settled.len(), "dijkstra finished");
    Ok(paths)
}
