//! Complete graphs over planar points.
//!
//! Each unordered pair of points becomes an edge whose weight is the Euclidean
//! distance rounded half-up to the nearest integer.

use tracing::{debug, instrument};

use crate::{
    edge::Weight,
    error::GeometryError,
    graph::Graph,
};

/// Largest weight that converts from `f64` without losing integral precision.
const MAX_EXACT_WEIGHT: f64 = 9_007_199_254_740_992.0;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Returns the Euclidean distance between `a` and `b` rounded half-up.
///
/// # Examples
/// ```
/// use spantree_core::{Point, euclidean_weight};
///
/// let weight = euclidean_weight(Point::new(0.0, 0.0), Point::new(3.0, 4.0))?;
/// assert_eq!(weight, 5);
/// let weight = euclidean_weight(Point::new(0.0, 0.0), Point::new(1.0, 1.0))?;
/// assert_eq!(weight, 1);
/// # Ok::<(), spantree_core::GeometryError>(())
/// ```
///
/// # Errors
/// Returns [`GeometryError::NonFinite`] when the distance is not finite or
/// too large to be represented exactly as a [`Weight`].
pub fn euclidean_weight(a: Point, b: Point) -> Result<Weight, GeometryError> {
    let distance = (a.x - b.x).hypot(a.y - b.y);
    if !distance.is_finite() {
        return Err(GeometryError::NonFinite { distance });
    }

    let rounded = (distance + 0.5).floor();
    if rounded > MAX_EXACT_WEIGHT {
        return Err(GeometryError::NonFinite { distance });
    }
    Ok(rounded as Weight)
}

/// Builds the complete graph over `points`, one vertex per point.
///
/// # Examples
/// ```
/// use spantree_core::{Point, graph_from_points};
///
/// let points = [Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(2.0, 0.0)];
/// let graph = graph_from_points(&points)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.weight_between(1, 2), Some(3));
/// # Ok::<(), spantree_core::GeometryError>(())
/// ```
///
/// # Errors
/// - [`GeometryError::Graph`] when `points` is empty.
/// - [`GeometryError::NonFiniteCoordinate`] when any point has a NaN or
///   infinite coordinate; no graph is built in that case.
/// - [`GeometryError::NonFinite`] when a pairwise distance overflows.
#[instrument(name = "geometry.graph_from_points", level = "debug", skip(points), fields(points = points.len()), err)]
pub fn graph_from_points(points: &[Point]) -> Result<Graph, GeometryError> {
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate { index });
    }

    let mut graph = Graph::new(points.len())?;
    for (i, &left) in points.iter().enumerate() {
        for (offset, &right) in points.iter().skip(i + 1).enumerate() {
            let weight = euclidean_weight(left, right)?;
            graph.add_edge(i, i + 1 + offset, weight)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "point graph built"
    );
    Ok(graph)
}
