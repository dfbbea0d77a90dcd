//! Structural invariants of the selected forest.
//!
//! For every generated graph the engine output must:
//!
//! - use only edges stored in the graph, at their current weights;
//! - keep every edge canonical (`source < dest`);
//! - contain no cycle;
//! - hold exactly `V - C` edges for `C` input components;
//! - report completeness exactly when the input is connected;
//! - report a total equal to the sum of its edge weights.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, KruskalEngine, MstResult};

use super::helpers::{count_components, is_acyclic};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let result = KruskalEngine::new().compute(&graph);
    let input_components = count_components(graph.vertex_count(), graph.edges());

    validate_membership(graph.edges(), result.edges(), fixture)?;
    validate_canonical_form(result.edges())?;
    validate_acyclicity(graph.vertex_count(), result.edges())?;
    validate_edge_count(&result, input_components, fixture)?;
    validate_completeness(&result, input_components)?;
    validate_total(&result)?;
    Ok(())
}

fn validate_membership(stored: &[Edge], selected: &[Edge], fixture: &MstFixture) -> TestCaseResult {
    let stored: HashSet<&Edge> = stored.iter().collect();
    for (i, edge) in selected.iter().enumerate() {
        if !stored.contains(edge) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge} is not stored in the graph ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_canonical_form(edges: &[Edge]) -> TestCaseResult {
    match edges.iter().position(|edge| edge.source() >= edge.dest()) {
        Some(i) => Err(TestCaseError::fail(format!(
            "edge {i}: {} is not canonical",
            edges[i]
        ))),
        None => Ok(()),
    }
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let refs: Vec<&Edge> = edges.iter().collect();
    if is_acyclic(vertex_count, &refs) {
        Ok(())
    } else {
        Err(TestCaseError::fail("selected edges contain a cycle"))
    }
}

fn validate_edge_count(
    result: &MstResult,
    input_components: usize,
    fixture: &MstFixture,
) -> TestCaseResult {
    let expected = result.vertex_count() - input_components;
    if result.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected} ({})",
            result.edge_count(),
            fixture.describe(),
        )));
    }
    if result.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "component count {}, input has {input_components}",
            result.component_count(),
        )));
    }
    Ok(())
}

fn validate_completeness(result: &MstResult, input_components: usize) -> TestCaseResult {
    if result.is_complete() != (input_components == 1) {
        return Err(TestCaseError::fail(format!(
            "is_complete() = {} but input has {input_components} components",
            result.is_complete(),
        )));
    }
    Ok(())
}

fn validate_total(result: &MstResult) -> TestCaseResult {
    if result.is_saturated() {
        return Err(TestCaseError::fail("fixture weights must not overflow the total"));
    }
    let sum: i64 = result.edges().iter().map(Edge::weight).sum();
    if sum != result.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from edge sum {sum}",
            result.total_weight(),
        )));
    }
    Ok(())
}
