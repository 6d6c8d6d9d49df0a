//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Edges are drawn from a min-priority queue in order of weight; an edge is
//! kept when its endpoints lie in different components of a disjoint-set
//! forest (and the two components are then merged), and discarded otherwise
//! since it would close a cycle.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};

use crate::graph::{DefaultIndexType, EdgeId, EdgeRef, Graph, Id, IndexType, VertexId, Weight};
use crate::util::disjoint_set::DisjointSetForest;
use crate::util::heap::{MinQueue, Priority};

/// Queue item ordering an edge by weight.
///
/// Equal weights fall back to edge id, so draws among equally light edges
/// always resolve the same way for the same graph.
#[derive(Copy, Clone, Debug)]
pub struct EdgeWeight<'a, W: Weight, Ix: IndexType>(pub EdgeRef<'a, W, Ix>);

impl<'a, W: Weight, Ix: IndexType> EdgeWeight<'a, W, Ix> {
    fn key(&self) -> (Priority<W>, EdgeId<Ix>) {
        (Priority(self.0.weight()), self.0.id())
    }
}

impl<'a, W: Weight, Ix: IndexType> PartialEq for EdgeWeight<'a, W, Ix> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<'a, W: Weight, Ix: IndexType> Eq for EdgeWeight<'a, W, Ix> {}

impl<'a, W: Weight, Ix: IndexType> PartialOrd for EdgeWeight<'a, W, Ix> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, W: Weight, Ix: IndexType> Ord for EdgeWeight<'a, W, Ix> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}


/// Edges selected by a minimum-spanning-tree run.
///
/// On a connected graph this is a spanning tree; otherwise it is a spanning
/// forest with one tree per connected component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningForest<W, Ix: IndexType = DefaultIndexType> {
    edges: Vec<EdgeId<Ix>>,
    total_weight: W,
    components: usize
}

impl<W: Weight, Ix: IndexType> SpanningForest<W, Ix> {
    /// Selected edges, in the order they were accepted (non-decreasing
    /// weight).
    #[inline]
    pub fn edges(&self) -> &[EdgeId<Ix>] {
        &self.edges
    }

    /// Consume the result, returning the selected edges.
    pub fn into_edges(self) -> Vec<EdgeId<Ix>> {
        self.edges
    }

    /// Sum of the selected edges' weights.
    #[inline]
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Number of connected components (trees) in the forest.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Number of selected edges; always `|V|` minus the component count.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether no edge was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check whether a particular edge was selected.
    pub fn contains(&self, e: EdgeId<Ix>) -> bool {
        self.edges.contains(&e)
    }
}


/// Kruskal's minimum spanning tree (or forest).
///
/// Intended for undirected graphs stored as pairs of opposite directed
/// edges; every directed edge is treated as an undirected connection, and
/// whichever half of a pair is drawn second is discarded because its
/// endpoints are already joined.  Self-loops are never selected.
///
/// Stops as soon as every vertex is in one component or the queue runs dry.
/// Which of several equally light spanning trees is returned is unspecified,
/// but the total weight is always the minimum.
///
/// Time: O(E log E)
pub fn minimum_spanning_tree<L, W, Ix>(graph: &Graph<L, W, Ix>) -> SpanningForest<W, Ix>
    where W: Weight, Ix: IndexType
{
    let n = graph.vertex_count();
    let _span = debug_span!("kruskal", vertices = n, edges = graph.edge_count()).entered();

    let mut queue: MinQueue<_> = graph.edges().map(EdgeWeight).collect();
    let mut forest = DisjointSetForest::<VertexId<Ix>>::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = W::zero();

    while forest.set_count() > 1 {
        let EdgeWeight(e) = match queue.pop() {
            Some(item) => item,
            None => break
        };
        if forest.union(e.source(), e.target()) {
            trace!(edge = e.id().index(), weight = ?e.weight(), "accepted");
            edges.push(e.id());
            total_weight = total_weight + e.weight();
        } else {
            trace!(edge = e.id().index(), "discarded; would close a cycle");
        }
    }

    let components = forest.set_count();
    debug!(selected = edges.len(), components, total_weight = ?total_weight, "kruskal finished");
    SpanningForest{edges, total_weight, components}
}


#[cfg(test)]
mod tests {
    use crate::graph::{Graph, Id, VertexId};
    use super::minimum_spanning_tree;

    fn v(i: usize) -> VertexId<u32> {
        VertexId::new(i)
    }

    #[test]
    fn picks_lightest_edges() {
        //  0 --1-- 1
        //  |  \    |
        //  4   3   2
        //  |     \ |
        //  3 --5-- 2
        let mut g = Graph::<u8, f64>::new();
        g.add_vertices(0..4);
        for &(a, b, w) in &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (0, 3, 4.0), (3, 2, 5.0)] {
            g.add_undirected_edge(v(a), v(b), w).unwrap();
        }

        let mst = minimum_spanning_tree(&g);
        assert_eq!(3, mst.len());
        assert_eq!(7.0, mst.total_weight());
        assert_eq!(1, mst.component_count());
        assert!(mst.contains(g.find_edge(v(0), v(1)).unwrap()));
        assert!(! mst.contains(g.find_edge(v(0), v(2)).unwrap()));
        assert!(! mst.contains(g.find_edge(v(2), v(0)).unwrap()));
    }

    #[test]
    fn self_loops_and_isolated_vertices() {
        let mut g = Graph::<u8, f64>::new();
        g.add_vertices(0..3);
        g.add_undirected_edge(v(0), v(0), -10.0).unwrap();
        g.add_undirected_edge(v(0), v(1), 2.0).unwrap();

        let mst = minimum_spanning_tree(&g);
        assert_eq!(2, mst.component_count());
        assert_eq!(vec![g.find_edge(v(0), v(1)).unwrap()], mst.into_edges());
    }

    #[test]
    fn negative_weights_are_fine() {
        let mut g = Graph::<u8, f32>::new();
        g.add_vertices(0..3);
        g.add_undirected_edge(v(0), v(1), -1.0).unwrap();
        g.add_undirected_edge(v(1), v(2), -2.0).unwrap();
        g.add_undirected_edge(v(0), v(2), 0.5).unwrap();

        let mst = minimum_spanning_tree(&g);
        assert_eq!(-3.0, mst.total_weight());
    }

    #[test]
    fn empty_graph() {
        let g = Graph::<u8, f64>::new();
        let mst = minimum_spanning_tree(&g);
        assert!(mst.is_empty());
        assert_eq!(0, mst.component_count());
        assert_eq!(0.0, mst.total_weight());
    }
}
