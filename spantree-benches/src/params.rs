//! Benchmark parameter types used as Criterion benchmark ids.

use std::fmt;

/// Parameters for a benchmark over the complete graph of a point cloud.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudParams {
    /// Number of points, and therefore vertices.
    pub point_count: usize,
}

impl fmt::Display for PointCloudParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a benchmark over a sparse random graph.
#[derive(Clone, Copy, Debug)]
pub struct SparseGraphParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges added on top of the spanning path.
    pub extra_edges: usize,
}

impl fmt::Display for SparseGraphParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},extra={}", self.vertex_count, self.extra_edges)
    }
}
