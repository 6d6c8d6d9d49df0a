//! Interfaces (traits) shared by the graph store and the algorithms that
//! run over it.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Float, NumCast, ToPrimitive};

/// Interface provided by vertex and edge identifiers.
pub trait Id: Copy + Debug + Eq + Ord + Hash {
    /// Create a new Id object with the given value.
    fn new(v: usize) -> Self;

    /// Retrieve the underlying integer value of the identifier.
    fn index(&self) -> usize;
}

/// Any integer type used as the underlying type for vertex and edge ids.
pub trait IndexType: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}
impl<T> IndexType for T where T: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}

/// Any type usable as an edge weight or path distance.
///
/// Weights are real numbers; `Float` gives us `+∞` for "unreachable" and the
/// arithmetic the algorithms need.  `f32` and `f64` both qualify.
pub trait Weight: Float + Debug + 'static {}
impl<T> Weight for T where T: Float + Debug + 'static {}
