//! Bounded, deduplicated edge store over a fixed vertex set.
//!
//! A [`Graph`] owns every edge it has accepted in insertion order. Undirected
//! edges are stored once in canonical orientation (`source < dest`), so adding
//! `(b, a)` after `(a, b)` updates the existing edge instead of storing a
//! second copy. The store never exceeds `V*(V-1)/2` edges, the number of
//! distinct pairs on a simple graph.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    edge::{Edge, VertexId, Weight},
    error::{GraphError, Result},
};

/// Upper bound on the number of edge slots reserved up front.
const PREALLOCATION_LIMIT: usize = 1 << 16;

/// Outcome of a successful [`Graph::add_edge`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeInsertion {
    /// A new edge was appended to the store.
    Inserted,
    /// An edge between the same endpoints already existed and was reweighted.
    Updated {
        /// Weight held by the edge before the update.
        previous: Weight,
    },
}

/// Weighted undirected graph with a fixed vertex count.
///
/// # Examples
/// ```
/// use spantree_core::{EdgeInsertion, Graph};
///
/// let mut graph = Graph::new(3)?;
/// assert_eq!(graph.add_edge(0, 1, 10)?, EdgeInsertion::Inserted);
/// assert_eq!(graph.add_edge(1, 0, 3)?, EdgeInsertion::Updated { previous: 10 });
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.weight_between(0, 1), Some(3));
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    capacity: usize,
    edges: Vec<Edge>,
    positions: HashMap<(VertexId, VertexId), usize>,
}

impl Graph {
    /// Creates an empty graph over `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: vertex_count });
        }

        let capacity = max_edges(vertex_count);
        let reserved = capacity.min(PREALLOCATION_LIMIT);
        Ok(Self {
            vertex_count,
            capacity,
            edges: Vec::with_capacity(reserved),
            positions: HashMap::with_capacity(reserved),
        })
    }

    /// Inserts the undirected edge `(u, v)` or updates its weight if present.
    ///
    /// Endpoints are canonicalised so that the stored edge satisfies
    /// `source < dest`. A rejected call leaves the graph unchanged.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] when either endpoint is not below
    ///   [`Self::vertex_count`].
    /// - [`GraphError::SelfLoop`] when `u == v`.
    /// - [`GraphError::CapacityExhausted`] when `(u, v)` is new and the store
    ///   already holds [`Self::capacity`] edges.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<EdgeInsertion> {
        if u >= self.vertex_count || v >= self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                source_vertex: u,
                dest: v,
                vertex_count: self.vertex_count,
            });
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }

        let key = canonical(u, v);
        if let Some(&position) = self.positions.get(&key) {
            if let Some(edge) = self.edges.get_mut(position) {
                let previous = edge.weight();
                edge.set_weight(weight);
                trace!(source = key.0, dest = key.1, previous, weight, "edge reweighted");
                return Ok(EdgeInsertion::Updated { previous });
            }
        }

        if self.is_full() {
            return Err(GraphError::CapacityExhausted {
                source_vertex: key.0,
                dest: key.1,
                capacity: self.capacity,
            });
        }

        self.positions.insert(key, self.edges.len());
        self.edges.push(Edge::new(key.0, key.1, weight));
        trace!(source = key.0, dest = key.1, weight, "edge inserted");
        Ok(EdgeInsertion::Inserted)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the maximum number of distinct edges, `V*(V-1)/2`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn capacity(&self) -> usize { self.capacity }

    /// Returns `true` when no further distinct edge can be inserted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.edges.len() >= self.capacity
    }

    /// Returns the stored edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the weight of the edge joining `u` and `v`, in either order.
    #[must_use]
    pub fn weight_between(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.positions
            .get(&canonical(u, v))
            .and_then(|&position| self.edges.get(position))
            .map(Edge::weight)
    }
}

/// Number of distinct undirected pairs on `vertex_count` vertices.
const fn max_edges(vertex_count: usize) -> usize {
    // One of `n` and `n - 1` is even, so halving it first keeps the product exact.
    let below = vertex_count.saturating_sub(1);
    if vertex_count % 2 == 0 {
        (vertex_count / 2).saturating_mul(below)
    } else {
        vertex_count.saturating_mul(below / 2)
    }
}

const fn canonical(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v { (u, v) } else { (v, u) }
}
