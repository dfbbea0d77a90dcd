//! In-place heap sort of edges by ascending weight.
//!
//! The sorter builds a binary max-heap over the slice and repeatedly moves the
//! current maximum to the end of the unsorted prefix. This gives `O(n log n)`
//! worst-case time with constant extra space. Ties may land in either order.

use crate::edge::Edge;

/// Comparison and swap counts gathered during the most recent sort.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Number of weight comparisons performed.
    pub comparisons: u64,
    /// Number of element swaps performed.
    pub swaps: u64,
}

/// Heap sorter that records [`SortStats`] for each run.
///
/// # Examples
/// ```
/// use spantree_core::{Edge, EdgeHeapSorter};
///
/// let mut edges = vec![Edge::new(0, 1, 9), Edge::new(1, 2, 4), Edge::new(0, 2, 7)];
/// let mut sorter = EdgeHeapSorter::new();
/// sorter.sort(&mut edges);
/// let weights: Vec<i64> = edges.iter().map(Edge::weight).collect();
/// assert_eq!(weights, [4, 7, 9]);
/// assert!(sorter.stats().comparisons > 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EdgeHeapSorter {
    stats: SortStats,
}

impl EdgeHeapSorter {
    /// Creates a sorter with zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistics recorded by the most recent [`Self::sort`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> SortStats { self.stats }

    /// Sorts `edges` by ascending weight in place.
    ///
    /// Slices with fewer than two elements are left untouched.
    pub fn sort(&mut self, edges: &mut [Edge]) {
        self.stats = SortStats::default();
        let len = edges.len();
        if len <= 1 {
            return;
        }

        self.build_heap(edges);
        for end in (1..len).rev() {
            edges.swap(0, end);
            self.stats.swaps += 1;
            self.heapify(edges, end, 0);
        }
    }

    /// Arranges `edges` into a max-heap keyed on weight.
    pub fn build_heap(&mut self, edges: &mut [Edge]) {
        let len = edges.len();
        for root in (0..len / 2).rev() {
            self.heapify(edges, len, root);
        }
    }

    /// Sifts `edges[root]` down until the first `heap_size` elements satisfy
    /// the max-heap property again.
    ///
    /// Assumes both subtrees of `root` already are max-heaps.
    pub fn heapify(&mut self, edges: &mut [Edge], heap_size: usize, mut root: usize) {
        let heap_size = heap_size.min(edges.len());
        loop {
            let mut largest = root;
            let left = 2 * root + 1;
            let right = left + 1;

            if left < heap_size {
                self.stats.comparisons += 1;
                if edges[left].weight() > edges[largest].weight() {
                    largest = left;
                }
            }
            if right < heap_size {
                self.stats.comparisons += 1;
                if edges[right].weight() > edges[largest].weight() {
                    largest = right;
                }
            }

            if largest == root {
                return;
            }
            edges.swap(root, largest);
            self.stats.swaps += 1;
            root = largest;
        }
    }
}

/// Sorts `edges` by ascending weight with a throwaway [`EdgeHeapSorter`].
pub fn heap_sort(edges: &mut [Edge]) {
    EdgeHeapSorter::new().sort(edges);
}
