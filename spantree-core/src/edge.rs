//! Weighted undirected edge records.

use std::fmt;

/// Index of a vertex within a [`crate::Graph`].
pub type VertexId = usize;

/// Integral edge weight. Point graphs round Euclidean distances to this type.
pub type Weight = i64;

/// A weighted edge between two vertices.
///
/// Edges stored in a [`crate::Graph`] are canonical: `source < dest`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    dest: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge exactly as given, without canonicalising endpoints.
    ///
    /// # Examples
    /// ```
    /// use spantree_core::Edge;
    ///
    /// let edge = Edge::new(3, 1, 7);
    /// assert_eq!((edge.source(), edge.dest(), edge.weight()), (3, 1, 7));
    /// ```
    #[must_use]
    pub const fn new(source: VertexId, dest: VertexId, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the destination endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dest(&self) -> VertexId { self.dest }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Replaces the edge weight.
    pub const fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// Returns `true` when the edge joins `u` and `v` in either orientation.
    #[must_use]
    pub const fn joins(&self, u: VertexId, v: VertexId) -> bool {
        (self.source == u && self.dest == v) || (self.source == v && self.dest == u)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (weight {})", self.source, self.dest, self.weight)
    }
}
