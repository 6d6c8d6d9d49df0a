//! Weighted edge and labelled vertex types stored by the graph.

use std::ops::Deref;

use smallvec::SmallVec;

use super::interface::Id;

// ----------------------------------------------------------------
// Edge

/// Weighted directed edge.
///
/// A reference to the edge's weight can be obtained using the type's `Deref`
/// implementation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge<W, I: Id> {
    source: I,
    target: I,
    weight: W
}

impl<W: Copy, I: Id> Edge<W, I> {
    /// Create an edge with the given source & target vertex ids and weight.
    #[inline]
    pub fn new(source: I, target: I, weight: W) -> Self {
        Edge{source, target, weight}
    }

    /// Id of the vertex the edge leaves.
    #[inline]
    pub fn source(&self) -> I { self.source }

    /// Id of the vertex the edge enters.
    #[inline]
    pub fn target(&self) -> I { self.target }

    /// Fetch the edge's weight.
    #[inline]
    pub fn weight(&self) -> W { self.weight }

    /// Fetch the ids of the edge's source and target vertices.
    #[inline]
    pub fn endpoints(&self) -> (I, I) {
        (self.source, self.target)
    }
}

impl<W, I: Id> Deref for Edge<W, I> {
    type Target = W;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.weight
    }
}

impl<W: Copy, I: Id, I2: Copy> From<(I2, I2, W)> for Edge<W, I>
    where I: From<I2> {
    fn from(u: (I2, I2, W)) -> Self {
        Self::new(I::from(u.0), I::from(u.1), u.2)
    }
}

impl<'a, W: Copy, I: Id, I2: Copy> From<&'a (I2, I2, W)> for Edge<W, I>
    where I: From<I2> {
    fn from(u: &'a (I2, I2, W)) -> Self {
        Self::new(I::from(u.0), I::from(u.1), u.2)
    }
}

// ----------------------------------------------------------------
// Vertex

/// Labelled vertex with cross-referenced edge lists.
///
/// A reference to the vertex's label can be obtained using the type's `Deref`
/// implementation.  The label is opaque to every algorithm; only the edge
/// lists are consulted.
#[derive(Clone, Debug)]
pub struct Vertex<L, I: Id> {
    incoming_edges: SmallVec<[I; 8]>,
    outgoing_edges: SmallVec<[I; 8]>,
    label: L
}

impl<L, I: Id> Vertex<L, I> {
    /// Instantiate a vertex with the given label and no edges.
    pub fn new(label: L) -> Self {
        Vertex{incoming_edges: SmallVec::new(), outgoing_edges: SmallVec::new(), label}
    }

    /// Retrieve a reference to the vertex's label.
    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Ids of edges that terminate at this vertex.
    ///
    /// A self-loop appears both here and in `outgoing_edges`.
    #[inline(always)]
    pub fn incoming_edges(&self) -> &[I] {
        &self.incoming_edges
    }

    /// Ids of edges that originate from this vertex.
    #[inline(always)]
    pub fn outgoing_edges(&self) -> &[I] {
        &self.outgoing_edges
    }

    /// Record the existence of an edge that terminates at this vertex.
    #[inline(always)]
    pub(crate) fn add_incoming_edge(&mut self, e: I) {
        self.incoming_edges.push(e);
    }

    /// Record the existence of an edge that originates from this vertex.
    #[inline(always)]
    pub(crate) fn add_outgoing_edge(&mut self, e: I) {
        self.outgoing_edges.push(e);
    }
}

impl<L, I: Id> Deref for Vertex<L, I> {
    type Target = L;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.label
    }
}
