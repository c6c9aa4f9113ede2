//! Minimum spanning tree weight and connectivity.
//!
//! Prim's algorithm runs directly over the dense weight matrix. Each step
//! picks the cheapest edge leaving the visited set, so a traversal from
//! `origin` spans exactly the connected component containing it. Only the
//! total weight is reported; no tree structure is kept.
//!
//! A per-vertex key array records the cheapest known connection from the
//! visited set to every other vertex, keeping each step linear in the vertex
//! count and the whole traversal `O(V²)`. Among equally cheap candidates the
//! lowest vertex index wins. Tie order is not part of the contract; the total
//! weight is.

mod scratch;

use tracing::{Span, debug, field, instrument};

use crate::{WeightedGraph, error::Result, graph::WeightMatrix};

pub(crate) use self::scratch::PrimScratch;

/// Totals gathered by one Prim traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PrimOutcome {
    weight: f64,
    visited: usize,
}

/// Grows a spanning tree from `origin`, leaving `scratch` marked with the
/// origin's component.
fn prim(matrix: &WeightMatrix, scratch: &mut PrimScratch, origin: usize) -> PrimOutcome {
    scratch.reset(origin);
    scratch.absorb(origin, matrix.row(origin));

    let mut outcome = PrimOutcome {
        weight: 0.0,
        visited: 1,
    };
    while outcome.visited < matrix.order() {
        let Some((vertex, key)) = scratch.cheapest_frontier() else {
            break;
        };
        outcome.weight += key;
        outcome.visited += 1;
        scratch.absorb(vertex, matrix.row(vertex));
    }
    outcome
}

impl WeightedGraph {
    /// Returns the total weight of a minimum spanning tree of the component
    /// containing `origin`.
    ///
    /// An isolated origin yields `0.0`. After the call the internal visited
    /// markers describe exactly the vertices reachable from `origin`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when `origin` is out of
    /// range.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(4);
    /// graph.set_edge(0, 1, 1.0)?;
    /// graph.set_edge(1, 2, 2.0)?;
    /// graph.set_edge(2, 3, 3.0)?;
    /// graph.set_edge(0, 3, 10.0)?;
    /// assert_eq!(graph.mst_weight(0)?, 6.0);
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.mst_weight",
        level = "debug",
        err,
        skip(self),
        fields(
            vertex_count = self.vertex_count(),
            weight = field::Empty,
            visited = field::Empty,
        ),
    )]
    pub fn mst_weight(&mut self, origin: usize) -> Result<f64> {
        self.check_vertex(origin)?;
        let (matrix, scratch) = self.prim_parts();
        let outcome = prim(matrix, scratch, origin);

        let span = Span::current();
        span.record("weight", outcome.weight);
        span.record("visited", outcome.visited);
        #[cfg(feature = "metrics")]
        {
            metrics::counter!("graph_mst_runs").increment(1);
            metrics::histogram!("graph_mst_visited_vertices")
                .record(f64::from(u32::try_from(outcome.visited).unwrap_or(u32::MAX)));
        }
        Ok(outcome.weight)
    }

    /// Returns `true` when every vertex lies in a single connected component.
    ///
    /// The empty graph is reported as not connected. The check runs
    /// [`WeightedGraph::mst_weight`] from vertex `0` and inspects the
    /// resulting visited markers.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(4);
    /// graph.set_edge(0, 1, 1.0)?;
    /// graph.set_edge(2, 3, 1.0)?;
    /// assert!(!graph.is_connected());
    /// assert!(!WeightedGraph::new(0).is_connected());
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    pub fn is_connected(&mut self) -> bool {
        if self.vertex_count() == 0 {
            debug!("empty graph reported as disconnected");
            return false;
        }
        let connected = self.mst_weight(0).is_ok() && self.visited().iter().all(|&seen| seen);
        debug!(connected, vertex_count = self.vertex_count(), "connectivity checked");
        connected
    }

    /// Returns the vertices reachable from `origin`, including `origin`, in
    /// ascending order.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when `origin` is out of
    /// range.
    pub fn component_of(&mut self, origin: usize) -> Result<Vec<usize>> {
        self.mst_weight(origin)?;
        Ok(self
            .visited()
            .iter()
            .enumerate()
            .filter_map(|(vertex, &seen)| seen.then_some(vertex))
            .collect())
    }
}
