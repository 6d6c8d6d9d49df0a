//! Disjoint-set forest ("union-find") over graph identifiers.
//!
//! Elements are identified by any [`Id`](../../graph/trait.Id.html) type; the
//! forest covers ids `0..len` and each element starts out in its own
//! singleton set.  `find` compresses paths as it walks, and `union` attaches
//! the shallower tree beneath the deeper one, so both run in near-constant
//! amortized time.

use std::fmt;
use std::marker::PhantomData;

use crate::graph::Id;

/// Partition of the ids `0..len` into disjoint sets.
#[derive(Clone)]
pub struct DisjointSetForest<I: Id> {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
    _id: PhantomData<I>
}

impl<I: Id> DisjointSetForest<I> {
    /// Create a forest of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        DisjointSetForest{parent: (0..len).collect(),
                          rank: vec![0; len],
                          sets: len,
                          _id: PhantomData}
    }

    /// Number of elements covered by the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether the forest covers no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every element visited on the way to the root is re-pointed directly at
    /// the root.  Panics if `x` is not covered by the forest.
    pub fn find(&mut self, x: I) -> I {
        I::new(self.find_index(x.index()))
    }

    fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` (and leaves the forest unchanged apart from path
    /// compression) if the two were already in the same set.
    pub fn union(&mut self, a: I, b: I) -> bool {
        let mut ra = self.find_index(a.index());
        let mut rb = self.find_index(b.index());
        if ra == rb {
            return false;
        }

        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] = self.rank[ra].saturating_add(1);
        }
        self.sets -= 1;
        true
    }

    /// Check whether `a` and `b` currently belong to the same set.
    pub fn same_set(&mut self, a: I, b: I) -> bool {
        self.find_index(a.index()) == self.find_index(b.index())
    }
}

impl<I: Id> fmt::Debug for DisjointSetForest<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DisjointSetForest")
            .field("len", &self.len())
            .field("sets", &self.sets)
            .finish()
    }
}
