//! Kruskal minimum spanning tree (MST) construction.
//!
//! [`KruskalEngine::compute`] runs three phases against a borrowed
//! [`Graph`]:
//!
//! 1. **Snapshot**: copy the stored edges into a private working vector so
//!    the graph's insertion order is never disturbed.
//! 2. **Order**: heap-sort the snapshot by ascending weight.
//! 3. **Select**: walk the ordered edges, accepting each one whose endpoints
//!    lie in different [`DisjointSet`] components, until `V - 1` edges are
//!    chosen or the snapshot is exhausted.
//!
//! A disconnected graph is not an error: the result carries a spanning forest
//! and reports [`MstResult::is_complete`] as `false`.

mod observer;

use tracing::{Span, field, instrument};

use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, Weight},
    graph::Graph,
    heap_sort::{EdgeHeapSorter, SortStats},
};

pub use self::observer::{MstObserver, NoopObserver, TracingObserver};

/// The output of one Kruskal computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_weight: Weight,
    vertex_count: usize,
    saturated: bool,
}

impl MstResult {
    fn empty(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
            vertex_count,
            saturated: false,
        }
    }

    fn add_weight(&mut self, weight: Weight) {
        // A clamped total stays clamped.
        if self.saturated {
            return;
        }
        match self.total_weight.checked_add(weight) {
            Some(total) => self.total_weight = total,
            None => {
                self.total_weight = self.total_weight.saturating_add(weight);
                self.saturated = true;
            }
        }
    }

    /// Returns the selected edges in the order they were accepted.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the selected edge weights.
    ///
    /// The sum is clamped to the [`Weight`] range; [`Self::is_saturated`]
    /// reports whether that happened.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns `true` when the exact total overflowed [`Weight`] and
    /// [`Self::total_weight`] holds the clamped value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_saturated(&self) -> bool { self.saturated }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of vertices in the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges a spanning tree over the graph needs.
    #[must_use]
    pub const fn required_edges(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }

    /// Returns the number of connected components in the selected forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.edges.len())
    }

    /// Returns `true` when the selected edges span every vertex.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.required_edges()
    }
}

/// Runs Kruskal's algorithm over [`Graph`] snapshots.
///
/// The engine is reusable; its heap sorter keeps the [`SortStats`] of the most
/// recent computation.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, KruskalEngine};
///
/// let mut graph = Graph::new(4)?;
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(2, 3, 3)?;
/// graph.add_edge(0, 3, 4)?;
///
/// let result = KruskalEngine::new().compute(&graph);
/// assert_eq!(result.total_weight(), 6);
/// assert!(result.is_complete());
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalEngine {
    sorter: EdgeHeapSorter,
}

impl KruskalEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sort statistics gathered by the most recent run.
    #[must_use]
    pub const fn sort_stats(&self) -> SortStats {
        self.sorter.stats()
    }

    /// Returns a copy of the graph's edges ordered by ascending weight.
    ///
    /// The graph itself is not modified.
    pub fn ordered_edges(&mut self, graph: &Graph) -> Vec<Edge> {
        let mut snapshot = graph.edges().to_vec();
        self.sorter.sort(&mut snapshot);
        snapshot
    }

    /// Computes a minimum spanning tree, or forest when `graph` is
    /// disconnected.
    pub fn compute(&mut self, graph: &Graph) -> MstResult {
        self.compute_with(graph, &mut NoopObserver)
    }

    /// Computes a minimum spanning tree while reporting progress to
    /// `observer`.
    #[instrument(
        name = "mst.kruskal",
        level = "debug",
        skip(self, graph, observer),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            selected = field::Empty,
            complete = field::Empty,
            saturated = field::Empty,
        ),
    )]
    pub fn compute_with(
        &mut self,
        graph: &Graph,
        observer: &mut impl MstObserver,
    ) -> MstResult {
        let vertex_count = graph.vertex_count();
        if graph.edge_count() == 0 || vertex_count <= 1 {
            let result = MstResult::empty(vertex_count);
            record_outcome(&result);
            observer.on_finished(&result);
            return result;
        }

        let ordered = self.ordered_edges(graph);
        observer.on_ordered(&ordered);

        let result = select(vertex_count, &ordered, observer);
        record_outcome(&result);
        observer.on_finished(&result);
        result
    }
}

fn select(vertex_count: usize, ordered: &[Edge], observer: &mut impl MstObserver) -> MstResult {
    let required = vertex_count.saturating_sub(1);
    let mut components = DisjointSet::new(vertex_count);
    let mut result = MstResult {
        edges: Vec::with_capacity(required),
        total_weight: 0,
        vertex_count,
        saturated: false,
    };

    for edge in ordered {
        if result.edges.len() == required {
            break;
        }
        if components.union(edge.source(), edge.dest()) {
            result.edges.push(*edge);
            result.add_weight(edge.weight());
            observer.on_accepted(edge);
        } else {
            observer.on_rejected(edge);
        }
    }

    result
}

fn record_outcome(result: &MstResult) {
    let span = Span::current();
    span.record("selected", result.edge_count());
    span.record("complete", result.is_complete());
    span.record("saturated", result.is_saturated());
}
