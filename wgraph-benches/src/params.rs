//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Probability that any given vertex pair carries an edge.
    pub edge_probability: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.edge_probability)
    }
}
