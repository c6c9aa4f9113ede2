//! Synthetic benchmark graphs.
//!
//! Generates dense [`WeightedGraph`] instances from a seed so that benchmark
//! runs are reproducible. Every vertex pair carries an edge with the
//! configured probability and a weight drawn from `(0, max_weight]`. An
//! optional random spanning path guarantees that the result is connected.

mod errors;

pub use errors::SyntheticError;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use wgraph_core::WeightedGraph;

/// Configuration for a synthetic graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability in `[0, 1]` that a vertex pair carries an edge.
    pub edge_probability: f64,
    /// Upper bound for edge weights; must be finite and positive.
    pub max_weight: f64,
    /// Whether to thread a random spanning path through every vertex first.
    pub connected: bool,
    /// RNG seed.
    pub seed: u64,
}

/// Seeded synthetic graph together with the edges used to build it.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: WeightedGraph,
    edges: Vec<(usize, usize, f64)>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroVertices`] when `vertex_count` is zero
    /// and [`SyntheticError::InvalidFloatParameter`] when the probability or
    /// the weight bound is out of range.
    ///
    /// # Examples
    /// ```
    /// use wgraph_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let mut synthetic = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 16,
    ///     edge_probability: 0.0,
    ///     max_weight: 10.0,
    ///     connected: true,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(synthetic.graph().edge_count(), 15);
    /// assert!(synthetic.graph_mut().is_connected());
    /// # Ok::<(), wgraph_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        validate_config(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = WeightedGraph::new(config.vertex_count);
        let mut edges = Vec::new();

        if config.connected {
            let mut order: Vec<usize> = (0..config.vertex_count).collect();
            order.shuffle(&mut rng);
            for pair in order.windows(2) {
                if let [m, n] = *pair {
                    let weight = draw_weight(&mut rng, config.max_weight);
                    graph.set_edge(m, n, weight)?;
                    edges.push((m, n, weight));
                }
            }
        }

        for m in 0..config.vertex_count {
            for n in (m + 1)..config.vertex_count {
                if !rng.gen_bool(config.edge_probability) {
                    continue;
                }
                let weight = draw_weight(&mut rng, config.max_weight);
                graph.set_edge(m, n, weight)?;
                edges.push((m, n, weight));
            }
        }

        Ok(Self { graph, edges })
    }

    /// Borrows the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Mutably borrows the generated graph, as MST queries require.
    pub const fn graph_mut(&mut self) -> &mut WeightedGraph {
        &mut self.graph
    }

    /// Every `set_edge` call made while generating, in order.
    ///
    /// A pair drawn for both the spanning path and the random fill appears
    /// twice; the later weight is the one stored.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    /// Consumes the wrapper, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }
}

fn validate_config(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if !(0.0..=1.0).contains(&config.edge_probability) {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "edge_probability",
        });
    }
    if !config.max_weight.is_finite() || config.max_weight <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "max_weight",
        });
    }
    Ok(())
}

/// Draws from `(0, max_weight]`; zero would request a removal.
fn draw_weight(rng: &mut SmallRng, max_weight: f64) -> f64 {
    max_weight * (1.0 - rng.r#gen::<f64>())
}
