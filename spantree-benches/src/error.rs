//! Benchmark setup error type.

use spantree_core::{GeometryError, GraphError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building a point graph failed.
    #[error("point graph construction failed: {0}")]
    Geometry(#[from] GeometryError),
    /// Building an edge-list graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a positive count was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
}
