//! Visitation hooks for search algorithms.

use super::common::VertexId;
use super::interface::{IndexType, Weight};


/// Whether a search should keep going after a visitor callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Control {
    /// Continue the search.
    Continue,

    /// Stop the search; results gathered so far are returned as-is.
    Break
}

/// Callback invoked by a search as each vertex's distance is finalized.
pub trait Visitor<W: Weight, Ix: IndexType> {
    /// Observe that `v` has been settled at `distance` from the source.
    fn settle(&mut self, v: VertexId<Ix>, distance: W) -> Control;
}

// We can use closures and free-standing functions as visitors.
impl<W: Weight, Ix: IndexType, F> Visitor<W, Ix> for F
    where F: FnMut(VertexId<Ix>, W) -> Control {
    #[inline]
    fn settle(&mut self, v: VertexId<Ix>, distance: W) -> Control {
        self(v, distance)
    }
}
