//! Union-find (disjoint set union) over vertex indices.
//!
//! Kruskal's selection phase asks one question per candidate edge: do its
//! endpoints already share a component? Path compression in [`DisjointSet::find`]
//! and union by rank in [`DisjointSet::union`] together keep a sequence of `m`
//! operations on `n` elements within `O(m · α(n))`.

use crate::edge::VertexId;

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use spantree_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.connected(1, 2));
/// assert!(sets.union(1, 3));
/// assert!(sets.connected(0, 2));
/// assert_eq!(sets.component_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets with rank zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set.
    ///
    /// Every node visited on the way up is re-pointed directly at the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: VertexId) -> VertexId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On a tie
    /// the root of `left` is kept and its rank grows by one. Returns `false`
    /// when both were already in the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: VertexId, right: VertexId) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn connected(&mut self, left: VertexId, right: VertexId) -> bool {
        self.find(left) == self.find(right)
    }
}
