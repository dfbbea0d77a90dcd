//! Equivalence with reference spanning-forest computations.
//!
//! The engine must agree with [`sequential_kruskal`] on total weight, edge
//! count and component count for every generated graph. Graphs small enough
//! for exhaustive search are additionally checked against
//! [`brute_force_forest`], which does not rely on Kruskal at all.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::KruskalEngine;

use super::oracle::{OracleResult, brute_force_forest, sequential_kruskal};
use super::types::{MstFixture, WeightDistribution};

/// Runs the sequential oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(graph.vertex_count(), graph.edges());
    compare(fixture, &oracle, "sequential")
}

/// Runs the exhaustive enumeration property for a tiny fixture.
///
/// Fixtures from other distributions are rejected so the search stays
/// bounded.
pub(super) fn run_brute_force_property(fixture: &MstFixture) -> TestCaseResult {
    if fixture.distribution != WeightDistribution::Tiny {
        return Err(TestCaseError::reject("only tiny graphs are enumerated"));
    }
    let graph = fixture.graph();
    let oracle = brute_force_forest(graph.vertex_count(), graph.edges());
    compare(fixture, &oracle, "brute force")
}

fn compare(fixture: &MstFixture, oracle: &OracleResult, label: &str) -> TestCaseResult {
    let result = KruskalEngine::new().compute(&fixture.graph());
    let actual = OracleResult {
        total_weight: result.total_weight(),
        edge_count: result.edge_count(),
        component_count: result.component_count(),
    };

    if &actual != oracle {
        return Err(TestCaseError::fail(format!(
            "{label} oracle mismatch: engine={actual:?}, oracle={oracle:?} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
