//! Shared test utilities for `wgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use wgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{NO_EDGE, WeightedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `WGRAPH_PBT_CASES` and
/// `WGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with `vertex_count` vertices from `(m, n, weight)` triples.
///
/// # Panics
/// Panics when any triple is rejected by [`WeightedGraph::set_edge`].
#[must_use]
pub(crate) fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(vertex_count);
    for &(m, n, weight) in edges {
        graph
            .set_edge(m, n, weight)
            .expect("fixture edges must be valid");
    }
    graph
}

/// Recomputes degrees and the edge count from the matrix and checks them,
/// together with symmetry and the zero diagonal, against the maintained
/// bookkeeping.
///
/// Returns a description of the first discrepancy found.
pub(crate) fn check_bookkeeping(graph: &WeightedGraph) -> Result<(), String> {
    let n = graph.vertex_count();
    let mut degrees = vec![0_usize; n];
    let mut pairs = 0_usize;

    for m in 0..n {
        for k in 0..n {
            let forward = graph.weight(m, k).map_err(|err| err.to_string())?;
            let backward = graph.weight(k, m).map_err(|err| err.to_string())?;
            if m == k {
                if forward != 0.0 {
                    return Err(format!("diagonal ({m}, {m}) holds {forward}"));
                }
                continue;
            }
            if forward.to_bits() != backward.to_bits() {
                return Err(format!("asymmetric pair ({m}, {k}): {forward} vs {backward}"));
            }
            if forward != NO_EDGE {
                if !(forward.is_finite() && forward > 0.0) {
                    return Err(format!("illegal stored weight {forward} at ({m}, {k})"));
                }
                degrees[m] += 1;
                if m < k {
                    pairs += 1;
                }
            }
        }
    }

    if degrees != graph.degrees() {
        return Err(format!(
            "degrees drifted: stored {:?}, recomputed {degrees:?}",
            graph.degrees()
        ));
    }
    if pairs != graph.edge_count() {
        return Err(format!(
            "edge count drifted: stored {}, recomputed {pairs}",
            graph.edge_count()
        ));
    }
    let degree_sum: usize = graph.degrees().iter().sum();
    if degree_sum != 2 * pairs {
        return Err(format!("degree sum {degree_sum} != 2 * {pairs}"));
    }
    Ok(())
}
