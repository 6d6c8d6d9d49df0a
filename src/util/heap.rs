//! Min-ordered priority queue adapter.
//!
//! `std::collections::BinaryHeap` is a max-heap over `Ord` items and has no
//! decrease-key operation.  [`MinQueue`](struct.MinQueue.html) flips the
//! ordering, and [`Priority`](struct.Priority.html) supplies the total order
//! that floating-point weights lack.  Callers that need decrease-key push a
//! fresh entry and discard stale ones as they are popped.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::Weight;

/// Total-order wrapper for edge weights and distances.
///
/// Weights stored in a [`Graph`](../../graph/struct.Graph.html) are always
/// finite, and distances derived from them are finite or `+∞`, so NaN never
/// reaches a `Priority`; it is treated as equal to everything if it does.
#[derive(Copy, Clone, Debug)]
pub struct Priority<W: Weight>(pub W);

impl<W: Weight> PartialEq for Priority<W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Priority<W> {}

impl<W: Weight> PartialOrd for Priority<W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Priority<W> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}


/// Priority queue that always yields its smallest item first.
#[derive(Clone, Debug)]
pub struct MinQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>
}

impl<T: Ord> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        MinQueue{heap: BinaryHeap::new()}
    }

    /// Create an empty queue with room for `n` items.
    pub fn with_capacity(n: usize) -> Self {
        MinQueue{heap: BinaryHeap::with_capacity(n)}
    }

    /// Insert an item.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove and return the smallest item, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Fetch a reference to the smallest item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|r| &r.0)
    }

    /// Number of queued items, stale entries included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for MinQueue<T> {
    #[inline(always)]
    fn default() -> Self {
        MinQueue::new()
    }
}

impl<T: Ord> FromIterator<T> for MinQueue<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        MinQueue{heap: iter.into_iter().map(Reverse).collect()}
    }
}

impl<T: Ord> Extend<T> for MinQueue<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.heap.extend(iter.into_iter().map(Reverse));
    }
}
