//! Iterators used by the graph implementation.

use std::fmt;
use std::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
use std::marker::PhantomData;
use std::ops;
use std::slice;

use super::common::{EdgeId, VertexId};
use super::interface::{Id, IndexType};
use super::weighted::Edge;


/// Iterator over the (vertex or edge) ids of a graph.
#[derive(Clone, Debug)]
pub struct Indices<T: Id>(ops::Range<usize>, PhantomData<T>);

impl<T: Id> Indices<T> {
    /// Create an `Indices` iterator over the given range.
    pub fn new(r: ops::Range<usize>) -> Self {
        Indices(r, PhantomData)
    }
}

impl<T: Id> Iterator for Indices<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(T::new)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Id> DoubleEndedIterator for Indices<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(T::new)
    }
}

impl<T: Id> ExactSizeIterator for Indices<T> {}


// ----------------------------------------------------------------

/// Borrowed view of one edge together with its id.
pub struct EdgeRef<'a, W: 'a, Ix: IndexType> {
    id: EdgeId<Ix>,
    edge: &'a Edge<W, VertexId<Ix>>
}

impl<'a, W: Copy, Ix: IndexType> EdgeRef<'a, W, Ix> {
    pub(crate) fn new(id: EdgeId<Ix>, edge: &'a Edge<W, VertexId<Ix>>) -> Self {
        EdgeRef{id, edge}
    }

    /// Id of the referenced edge.
    #[inline]
    pub fn id(&self) -> EdgeId<Ix> { self.id }

    /// Id of the vertex the edge leaves.
    #[inline]
    pub fn source(&self) -> VertexId<Ix> { self.edge.source() }

    /// Id of the vertex the edge enters.
    #[inline]
    pub fn target(&self) -> VertexId<Ix> { self.edge.target() }

    /// The edge's weight.
    #[inline]
    pub fn weight(&self) -> W { self.edge.weight() }
}

impl<'a, W, Ix: IndexType> Clone for EdgeRef<'a, W, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, W, Ix: IndexType> Copy for EdgeRef<'a, W, Ix> {}

impl<'a, W: fmt::Debug, Ix: IndexType> fmt::Debug for EdgeRef<'a, W, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("edge", self.edge)
            .finish()
    }
}


/// Iterator over the edges named in one of a vertex's edge lists.
pub struct EdgeRefs<'a, W: 'a, Ix: IndexType> {
    edges: &'a [Edge<W, VertexId<Ix>>],
    iter: slice::Iter<'a, EdgeId<Ix>>
}

impl<'a, W, Ix: IndexType> EdgeRefs<'a, W, Ix> {
    /// Create an iterator resolving each id in `ids` against `edges`.
    pub(crate) fn new(edges: &'a [Edge<W, VertexId<Ix>>], ids: &'a [EdgeId<Ix>]) -> Self {
        EdgeRefs{edges, iter: ids.iter()}
    }
}

impl<'a, W: Copy, Ix: IndexType> Iterator for EdgeRefs<'a, W, Ix> {
    type Item = EdgeRef<'a, W, Ix>;
    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.iter.next().map(|&id| EdgeRef::new(id, &edges[id.index()]))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, W: Copy, Ix: IndexType> DoubleEndedIterator for EdgeRefs<'a, W, Ix> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.iter.next_back().map(|&id| EdgeRef::new(id, &edges[id.index()]))
    }
}

impl<'a, W: Copy, Ix: IndexType> ExactSizeIterator for EdgeRefs<'a, W, Ix> {}


/// Iterator over every edge of a graph, in insertion order.
pub struct AllEdges<'a, W: 'a, Ix: IndexType> {
    iter: std::iter::Enumerate<slice::Iter<'a, Edge<W, VertexId<Ix>>>>
}

impl<'a, W, Ix: IndexType> AllEdges<'a, W, Ix> {
    pub(crate) fn new(edges: &'a [Edge<W, VertexId<Ix>>]) -> Self {
        AllEdges{iter: edges.iter().enumerate()}
    }
}

impl<'a, W: Copy, Ix: IndexType> Iterator for AllEdges<'a, W, Ix> {
    type Item = EdgeRef<'a, W, Ix>;
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(i, edge)| EdgeRef::new(EdgeId::new(i), edge))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, W: Copy, Ix: IndexType> ExactSizeIterator for AllEdges<'a, W, Ix> {}
