//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated graph and every origin, verifies that Prim reports the
//! same total weight as the oracle's spanning forest restricted to the
//! origin's component, marks exactly that component as reachable, and that
//! `is_connected` agrees with the oracle's component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::weights_match;
use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = fixture.build().map_err(TestCaseError::fail)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    for origin in 0..fixture.vertex_count {
        let prim_weight = graph.mst_weight(origin).map_err(|e| {
            TestCaseError::fail(format!(
                "mst_weight({origin}) failed: {e} (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            ))
        })?;
        let expected = oracle.weight_from(origin);
        if !weights_match(prim_weight, expected) {
            return Err(TestCaseError::fail(format!(
                "total weight mismatch from origin {origin}: prim={prim_weight}, oracle={expected} \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            )));
        }

        let component = graph
            .component_of(origin)
            .map_err(|e| TestCaseError::fail(format!("component_of({origin}) failed: {e}")))?;
        let expected_component = oracle.component_of(origin);
        if component != expected_component {
            return Err(TestCaseError::fail(format!(
                "component mismatch from origin {origin}: prim={component:?}, \
                 oracle={expected_component:?} (distribution={:?})",
                fixture.distribution,
            )));
        }
    }

    let connected = graph.is_connected();
    if connected != oracle.is_connected() {
        return Err(TestCaseError::fail(format!(
            "connectivity mismatch: graph={connected}, oracle components={} \
             (distribution={:?}, vertices={})",
            oracle.component_count, fixture.distribution, fixture.vertex_count,
        )));
    }

    let forest_edges = fixture.vertex_count - oracle.component_count;
    if oracle.edge_count != forest_edges {
        return Err(TestCaseError::fail(format!(
            "oracle forest has {} edges, expected {forest_edges}",
            oracle.edge_count,
        )));
    }

    Ok(())
}
