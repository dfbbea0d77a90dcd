//! Repeated runs over the same graph must produce identical results.
//!
//! A reused engine and a fresh engine are both compared against the first
//! run, so neither sorter state nor a previous computation can leak into the
//! next one.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::KruskalEngine;

use super::types::MstFixture;

const REPEATS: usize = 3;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let before = graph.edges().to_vec();
    let mut engine = KruskalEngine::new();
    let baseline = engine.compute(&graph);
    let baseline_stats = engine.sort_stats();

    for attempt in 0..REPEATS {
        let reused = engine.compute(&graph);
        let fresh = KruskalEngine::new().compute(&graph);
        if reused != baseline || fresh != baseline {
            return Err(TestCaseError::fail(format!(
                "attempt {attempt}: results diverged ({})",
                fixture.describe(),
            )));
        }
        if engine.sort_stats() != baseline_stats {
            return Err(TestCaseError::fail(format!(
                "attempt {attempt}: sort statistics diverged: {:?} vs {baseline_stats:?}",
                engine.sort_stats(),
            )));
        }
    }

    if graph.edges() != before.as_slice() {
        return Err(TestCaseError::fail("computation reordered the stored edges"));
    }
    Ok(())
}
