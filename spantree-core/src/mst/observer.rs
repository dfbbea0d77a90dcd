//! Progress callbacks for [`super::KruskalEngine::compute_with`].

use tracing::{debug, info, trace, warn};

use crate::edge::Edge;

use super::MstResult;

/// Receives progress notifications while a spanning tree is selected.
///
/// Every method defaults to a no-op so implementors only override what they
/// need.
pub trait MstObserver {
    /// Called once with the snapshot after it has been sorted by weight.
    fn on_ordered(&mut self, _edges: &[Edge]) {}

    /// Called for each edge added to the tree.
    fn on_accepted(&mut self, _edge: &Edge) {}

    /// Called for each edge skipped because it would close a cycle.
    fn on_rejected(&mut self, _edge: &Edge) {}

    /// Called once with the final result.
    fn on_finished(&mut self, _result: &MstResult) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MstObserver for NoopObserver {}

/// Observer that forwards notifications as `tracing` events.
///
/// Ordering and selection steps are emitted at `debug`/`trace`; the final
/// summary is emitted at `info`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MstObserver for TracingObserver {
    fn on_ordered(&mut self, edges: &[Edge]) {
        debug!(edges = edges.len(), "edges ordered by weight");
        for (rank, edge) in edges.iter().enumerate() {
            trace!(
                rank,
                source = edge.source(),
                dest = edge.dest(),
                weight = edge.weight(),
                "ordered edge"
            );
        }
    }

    fn on_accepted(&mut self, edge: &Edge) {
        debug!(
            source = edge.source(),
            dest = edge.dest(),
            weight = edge.weight(),
            "edge accepted"
        );
    }

    fn on_rejected(&mut self, edge: &Edge) {
        trace!(
            source = edge.source(),
            dest = edge.dest(),
            weight = edge.weight(),
            "edge rejected: would close a cycle"
        );
    }

    fn on_finished(&mut self, result: &MstResult) {
        if result.is_saturated() {
            warn!(
                total_weight = result.total_weight(),
                "total weight overflowed and was clamped"
            );
        }
        info!(
            selected = result.edge_count(),
            required = result.required_edges(),
            total_weight = result.total_weight(),
            complete = result.is_complete(),
            "minimum spanning tree computed"
        );
    }
}
