//! Vertex/edge identifiers and the adjacency-list graph store.

use std::fmt;
use std::ops;

use num_traits::{NumCast, ToPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use super::interface::{Id, IndexType, Weight};
use super::iter::{AllEdges, EdgeRef, EdgeRefs, Indices};
use super::weighted::{Edge, Vertex};

// ================================================================
// Indices: types used to identify vertices and edges.

/// Default integer type used to identify vertices and edges.
pub type DefaultIndexType = u32;

macro_rules! impl_index_wrapper_type {
    ($tp: ty, $n: ident, $T: ident) => {
        impl<$T: IndexType> Id for $tp {
            #[inline(always)]
            fn new(v: usize) -> Self {
                $n(NumCast::from(v).expect("identifier out of range for its index type"))
            }
            #[inline(always)]
            fn index(&self) -> usize {
                NumCast::from(self.0).expect("identifier out of range for usize")
            }
        }

        /// Panics if `v` is negative or does not fit in the index type.
        impl<U: NumCast + ToPrimitive, $T: IndexType> From<U> for $tp {
            fn from(v: U) -> Self {
                Self::new(NumCast::from(v).expect("negative or oversized identifier"))
            }
        }

        impl<$T: IndexType> fmt::Display for $tp {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }
    }
}

/// Type used to identify and index the edges of a graph.
#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeId<T: IndexType>(T);
impl_index_wrapper_type!(EdgeId<T>, EdgeId, T);

/// Type used to identify and index the vertices of a graph.
///
/// A vertex id doubles as the vertex's position in the graph's stable
/// enumeration order: the `i`-th vertex added has index `i`.
#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexId<T: IndexType>(T);
impl_index_wrapper_type!(VertexId<T>, VertexId, T);


// --------------------------------
// Graph

/// Adjacency-list graph with weighted directed edges.
///
/// `L` is the type of label attached to each vertex, `W` the edge-weight type,
/// and `Ix` the integer type used for vertex and edge ids.  Each vertex keeps
/// both an outgoing and an incoming edge list, so forward and backward
/// neighbour iteration are both proportional to the degree involved.
///
/// The graph is *simple*: at most one edge exists for any ordered pair of
/// vertices.  An undirected edge is represented by two directed edges of
/// equal weight; see [`add_undirected_edge`](#method.add_undirected_edge).
#[derive(Clone)]
pub struct Graph<L, W, Ix: IndexType = DefaultIndexType> {
    vertices: Vec<Vertex<L, EdgeId<Ix>>>,
    edges: Vec<Edge<W, VertexId<Ix>>>
}

impl<L, W: Weight, Ix: IndexType> Graph<L, W, Ix> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph{vertices: Vec::new(), edges: Vec::new()}
    }

    /// Create an empty graph with room for the given numbers of vertices and
    /// edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Graph{vertices: Vec::with_capacity(vertices), edges: Vec::with_capacity(edges)}
    }

    // --------------------------------
    // Vertices

    /// Add a vertex carrying the given label, returning its id.
    ///
    /// Labels are opaque and need not be unique.  Panics if the vertex count
    /// would overflow `Ix`.
    pub fn add_vertex(&mut self, label: L) -> VertexId<Ix> {
        self.vertices.push(Vertex::new(label));
        VertexId::new(self.vertices.len() - 1)
    }

    /// Add one vertex per label, returning the new ids in order.
    pub fn add_vertices<T>(&mut self, labels: T) -> Vec<VertexId<Ix>>
        where T: IntoIterator<Item = L>
    {
        labels.into_iter().map(|l| self.add_vertex(l)).collect()
    }

    /// Check if a vertex id is valid for this graph.
    #[inline(always)]
    pub fn contains_vertex(&self, v: VertexId<Ix>) -> bool {
        v.index() < self.vertices.len()
    }

    /// Fail with `Error::UnknownVertex` unless `v` is valid for this graph.
    #[inline]
    pub fn check_vertex(&self, v: VertexId<Ix>) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(v.index()))
        }
    }

    /// Count the number of vertices in the graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Fetch an iterator over the ids of all vertices in the graph.
    ///
    /// The order is insertion order, and never changes for the lifetime of
    /// the graph: vertex `i` is always yielded `i`-th.
    #[inline]
    pub fn vertices(&self) -> Indices<VertexId<Ix>> {
        Indices::new(0..self.vertices.len())
    }

    /// Fetch a vertex's label, or `None` for an unknown id.
    pub fn label(&self, v: VertexId<Ix>) -> Option<&L> {
        self.vertices.get(v.index()).map(|vertex| vertex.label())
    }

    /// Find the first vertex (in enumeration order) carrying `label`.
    pub fn find_vertex(&self, label: &L) -> Option<VertexId<Ix>>
        where L: PartialEq
    {
        self.vertices.iter().position(|vertex| **vertex == *label).map(VertexId::new)
    }

    // --------------------------------
    // Edges

    /// Add a directed edge `from → to` with the given weight.
    ///
    /// Fails without modifying the graph if either endpoint is unknown, if the
    /// weight is NaN or infinite, or if an edge `from → to` already exists.
    pub fn add_edge(&mut self, from: VertexId<Ix>, to: VertexId<Ix>, weight: W) -> Result<EdgeId<Ix>> {
        self.check_new_edge(from, to, weight)?;
        Ok(self.push_edge(from, to, weight))
    }

    /// Add an undirected edge between `a` and `b`, stored as the directed
    /// pair `a → b` and `b → a` with equal weights.
    ///
    /// Both directions are validated before either is inserted, so a failure
    /// leaves the graph unchanged.  When `a == b` a single self-loop is
    /// inserted and its id is returned twice.
    pub fn add_undirected_edge(&mut self, a: VertexId<Ix>, b: VertexId<Ix>, weight: W)
                               -> Result<(EdgeId<Ix>, EdgeId<Ix>)> {
        self.check_new_edge(a, b, weight)?;
        if a == b {
            let e = self.push_edge(a, b, weight);
            return Ok((e, e));
        }
        self.check_new_edge(b, a, weight)?;
        let forward = self.push_edge(a, b, weight);
        let backward = self.push_edge(b, a, weight);
        Ok((forward, backward))
    }

    /// Convert all elements in a slice to edges, and add them to the graph.
    ///
    /// Each element is a `(source_index, target_index, weight)` tuple.
    ///
    /// ```rust
    /// use wgraph::Graph;
    ///
    /// # fn main() -> wgraph::Result<()> {
    /// let mut g = Graph::<(), f64>::new();
    /// g.add_vertices(vec![(); 4]);
    /// g.add_edges(&[(0, 1, 1.0), (1, 2, 0.5), (1, 3, 2.0), (2, 3, 1.0)])?;
    /// assert_eq!(4, g.edge_count());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Edges are inserted in order; insertion stops at the first edge that
    /// [`add_edge`](#method.add_edge) rejects, and that error is returned.
    ///
    /// Panics if a tuple index is negative or does not fit in `Ix`; an index
    /// that fits but names no vertex is reported as `Error::UnknownVertex`.
    pub fn add_edges<'a, D>(&mut self, edges: &'a [D]) -> Result<Vec<EdgeId<Ix>>>
        where D: 'a, Edge<W, VertexId<Ix>>: From<&'a D>
    {
        let mut ids = Vec::with_capacity(edges.len());
        for e in edges.iter() {
            let edge = Edge::from(e);
            ids.push(self.add_edge(edge.source(), edge.target(), edge.weight())?);
        }
        Ok(ids)
    }

    /// Count the number of edges in the graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if an edge id is valid for this graph.
    #[inline]
    pub fn contains_edge(&self, e: EdgeId<Ix>) -> bool {
        e.index() < self.edges.len()
    }

    /// Fetch an edge by id, or `None` for an unknown id.
    pub fn edge(&self, e: EdgeId<Ix>) -> Option<EdgeRef<W, Ix>> {
        self.edges.get(e.index()).map(|edge| EdgeRef::new(e, edge))
    }

    /// Fetch an iterator over all edges, in insertion order.
    pub fn edges(&self) -> AllEdges<W, Ix> {
        AllEdges::new(&self.edges)
    }

    /// Find the id of the edge `from → to`, if there is one.
    pub fn find_edge(&self, from: VertexId<Ix>, to: VertexId<Ix>) -> Option<EdgeId<Ix>> {
        if ! self.contains_vertex(from) {
            return None;
        }
        self.outgoing(from).find(|e| e.target() == to).map(|e| e.id())
    }

    /// Get an iterator over the edges leaving `v`.
    pub fn out_edges(&self, v: VertexId<Ix>) -> Result<EdgeRefs<W, Ix>> {
        self.check_vertex(v)?;
        Ok(self.outgoing(v))
    }

    /// Get an iterator over the edges entering `v`.
    ///
    /// A self-loop on `v` is reported by both this iterator and the one
    /// returned by `out_edges`.
    pub fn in_edges(&self, v: VertexId<Ix>) -> Result<EdgeRefs<W, Ix>> {
        self.check_vertex(v)?;
        Ok(self.incoming(v))
    }

    /// Fetch an iterator over the direct successors of `v`.
    pub fn successors(&self, v: VertexId<Ix>) -> Result<impl Iterator<Item = VertexId<Ix>> + '_> {
        Ok(self.out_edges(v)?.map(|e| e.target()))
    }

    /// Unchecked form of `out_edges`; panics on an invalid id.
    #[inline]
    pub(crate) fn outgoing(&self, v: VertexId<Ix>) -> EdgeRefs<W, Ix> {
        EdgeRefs::new(&self.edges, self.vertices[v.index()].outgoing_edges())
    }

    /// Unchecked form of `in_edges`; panics on an invalid id.
    #[inline]
    pub(crate) fn incoming(&self, v: VertexId<Ix>) -> EdgeRefs<W, Ix> {
        EdgeRefs::new(&self.edges, self.vertices[v.index()].incoming_edges())
    }

    fn check_new_edge(&self, from: VertexId<Ix>, to: VertexId<Ix>, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if ! weight.is_finite() {
            return Err(Error::NonFiniteWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        if self.find_edge(from, to).is_some() {
            return Err(Error::DuplicateEdge{from: from.index(), to: to.index()});
        }
        Ok(())
    }

    fn push_edge(&mut self, from: VertexId<Ix>, to: VertexId<Ix>, weight: W) -> EdgeId<Ix> {
        self.edges.push(Edge::new(from, to, weight));
        let index = EdgeId::new(self.edges.len() - 1);

        // Update cross-referenced edge lists for the connected vertices.
        self.vertices[from.index()].add_outgoing_edge(index);
        self.vertices[to.index()].add_incoming_edge(index);

        trace!(edge = index.index(), from = from.index(), to = to.index(), ?weight, "added edge");
        index
    }
}

impl<L, W: Weight, Ix: IndexType> Default for Graph<L, W, Ix> {
    #[inline(always)]
    fn default() -> Self {
        Graph::new()
    }
}

impl<L, W: Weight, Ix: IndexType> fmt::Debug for Graph<L, W, Ix>
    where L: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices.iter().map(|v| v.label()).collect::<Vec<_>>())
            .field("edges", &self.edges)
            .finish()
    }
}


// Implement label and edge lookup via indexing.
macro_rules! graph_index_impl {
    ($tp: ty, $r: ty, $m: ident) => {
        impl<L, W: Weight, Ix: IndexType> ops::Index<$tp> for Graph<L, W, Ix> {
            type Output = $r;
            fn index(&self, ix: $tp) -> &$r {
                &*self.$m[ix.index()]
            }
        }

        impl<'a, L, W: Weight, Ix: IndexType> ops::Index<&'a $tp> for Graph<L, W, Ix> {
            type Output = $r;
            fn index(&self, ix: &'a $tp) -> &$r {
                &*self.$m[ix.index()]
            }
        }
    }
}
graph_index_impl!(VertexId<Ix>, L, vertices);
graph_index_impl!(EdgeId<Ix>, W, edges);


#[cfg(test)]
mod tests {
    use crate::error::Error;
    use super::{Graph, VertexId};
    use crate::graph::Id;

    type G = Graph<char, f64>;

    fn abcd() -> (G, Vec<VertexId<u32>>) {
        let mut g = G::new();
        let vs = g.add_vertices("ABCD".chars());
        (g, vs)
    }

    #[test]
    fn vertices_enumerate_in_insertion_order() {
        let (g, vs) = abcd();
        assert_eq!(vs, g.vertices().collect::<Vec<_>>());
        assert_eq!(vec![0, 1, 2, 3], vs.iter().map(|v| v.index()).collect::<Vec<_>>());
        assert_eq!('C', g[vs[2]]);
        assert_eq!(Some(&'D'), g.label(vs[3]));
        assert_eq!(Some(vs[1]), g.find_vertex(&'B'));
        assert_eq!(None, g.find_vertex(&'Z'));
    }

    #[test]
    fn edges_are_cross_referenced() {
        let (mut g, vs) = abcd();
        let ab = g.add_edge(vs[0], vs[1], 1.0).unwrap();
        let cb = g.add_edge(vs[2], vs[1], 3.0).unwrap();

        let out: Vec<_> = g.out_edges(vs[0]).unwrap().map(|e| e.id()).collect();
        assert_eq!(vec![ab], out);

        let inc: Vec<_> = g.in_edges(vs[1]).unwrap().map(|e| (e.id(), e.source(), e.weight())).collect();
        assert_eq!(vec![(ab, vs[0], 1.0), (cb, vs[2], 3.0)], inc);

        // Every edge sits in exactly one outgoing and one incoming list.
        for e in g.edges() {
            let outs = g.vertices().flat_map(|v| g.out_edges(v).unwrap()).filter(|o| o.id() == e.id()).count();
            let ins = g.vertices().flat_map(|v| g.in_edges(v).unwrap()).filter(|i| i.id() == e.id()).count();
            assert_eq!((1, 1), (outs, ins));
        }
        assert_eq!(3.0, g[cb]);
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let (mut g, vs) = abcd();
        g.add_edge(vs[0], vs[1], 1.0).unwrap();
        assert_eq!(Err(Error::DuplicateEdge{from: 0, to: 1}), g.add_edge(vs[0], vs[1], 7.0));
        assert_eq!(1, g.edge_count());
        assert_eq!(1.0, g.edges().next().unwrap().weight());

        // The reverse direction is a different edge.
        assert!(g.add_edge(vs[1], vs[0], 7.0).is_ok());
    }

    #[test]
    fn unknown_vertex_and_bad_weight_are_rejected() {
        let (mut g, vs) = abcd();
        let ghost = VertexId::<u32>::new(9);
        assert_eq!(Err(Error::UnknownVertex(9)), g.add_edge(vs[0], ghost, 1.0));
        assert_eq!(Err(Error::UnknownVertex(9)), g.out_edges(ghost).map(|_| ()));
        assert!(matches!(g.add_edge(vs[0], vs[1], f64::NAN), Err(Error::NonFiniteWeight(_))));
        assert_eq!(Err(Error::NonFiniteWeight(f64::INFINITY)), g.add_edge(vs[0], vs[1], f64::INFINITY));
        assert_eq!(0, g.edge_count());
    }

    #[test]
    fn undirected_edge_is_atomic() {
        let (mut g, vs) = abcd();
        let (ab, ba) = g.add_undirected_edge(vs[0], vs[1], 2.0).unwrap();
        assert_eq!(Some(ab), g.find_edge(vs[0], vs[1]));
        assert_eq!(Some(ba), g.find_edge(vs[1], vs[0]));

        g.add_edge(vs[3], vs[2], 1.0).unwrap();
        assert_eq!(Err(Error::DuplicateEdge{from: 3, to: 2}), g.add_undirected_edge(vs[2], vs[3], 1.0).map(|_| ()));
        assert_eq!(None, g.find_edge(vs[2], vs[3]));
        assert_eq!(3, g.edge_count());

        let (l0, l1) = g.add_undirected_edge(vs[2], vs[2], 0.5).unwrap();
        assert_eq!(l0, l1);
        assert_eq!(1, g.in_edges(vs[2]).unwrap().filter(|e| e.source() == vs[2]).count());
    }

    #[test]
    fn bulk_edges_stop_at_first_error() {
        let mut g = Graph::<(), f32>::new();
        g.add_vertices(vec![(); 3]);
        let r = g.add_edges(&[(0, 1, 1.0), (1, 2, 1.0), (0, 1, 5.0), (2, 0, 1.0)]);
        assert_eq!(Err(Error::DuplicateEdge{from: 0, to: 1}), r);
        assert_eq!(2, g.edge_count());
        assert_eq!(vec![VertexId::new(2)], g.successors(VertexId::new(1)).unwrap().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "identifier out of range")]
    fn vertex_count_is_bounded_by_index_type() {
        let mut g = Graph::<(), f64, u8>::new();
        g.add_vertices(vec![(); 256]);
        assert_eq!(255, g.vertices().last().unwrap().index());
        g.add_vertex(());
    }

    #[test]
    #[should_panic(expected = "negative or oversized identifier")]
    fn negative_tuple_index_panics() {
        let (mut g, _) = abcd();
        let _ = g.add_edges(&[(0, -1, 1.0)]);
    }

    #[test]
    fn oversized_tuple_index_that_fits_is_an_error() {
        let (mut g, _) = abcd();
        assert_eq!(Err(Error::UnknownVertex(300)), g.add_edges(&[(0, 300, 1.0)]));
        assert_eq!(0, g.edge_count());
    }
}
