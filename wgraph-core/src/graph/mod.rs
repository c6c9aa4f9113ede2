//! Dense undirected weighted graph.
//!
//! [`WeightedGraph`] owns a fixed `n × n` weight matrix together with
//! incrementally maintained per-vertex degrees and an edge count. The vertex
//! count is chosen at construction and never changes; edges are inserted,
//! re-weighted, and removed through [`WeightedGraph::set_edge`].

mod display;
mod matrix;

use tracing::{debug, trace};

use crate::{
    error::{GraphError, Result},
    mst::PrimScratch,
};

pub(crate) use self::matrix::WeightMatrix;

/// Weight stored for vertex pairs that are not joined by an edge.
///
/// Legal edge weights are finite and strictly positive, so the sentinel can
/// never be mistaken for a real edge.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Vertex count used by [`WeightedGraph::default`].
pub const DEFAULT_VERTEX_COUNT: usize = 50;

/// Effect of a successful [`WeightedGraph::set_edge`] call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeChange {
    /// A new edge was created; both degrees and the edge count grew by one.
    Inserted,
    /// An existing edge received a new weight; counts are unchanged.
    Updated,
    /// An existing edge was deleted; both degrees and the edge count shrank
    /// by one.
    Removed,
    /// A removal was requested for a pair with no edge.
    Unchanged,
}

impl EdgeChange {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
            Self::Removed => "removed",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Undirected weighted graph over a fixed number of vertices, stored as a
/// dense adjacency matrix.
///
/// Minimum spanning tree queries reuse an internal visited buffer and so take
/// `&mut self`. Wrap the graph in a lock if it must be shared between
/// threads.
///
/// # Examples
/// ```
/// use wgraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.set_edge(0, 1, 2.0)?;
/// graph.set_edge(1, 2, 3.0)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.mst_weight(0)?, 5.0);
/// assert!(graph.is_connected());
/// # Ok::<(), wgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    weights: WeightMatrix,
    degrees: Vec<usize>,
    edge_count: usize,
    scratch: PrimScratch,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_COUNT)
    }
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// A zero vertex count yields a valid empty graph.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: WeightMatrix::new(vertex_count),
            degrees: vec![0; vertex_count],
            edge_count: 0,
            scratch: PrimScratch::new(vertex_count),
        }
    }

    /// Returns the number of vertices fixed at construction.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.weights.order()
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.degrees.get(vertex).copied().unwrap_or_default())
    }

    /// Returns the degree of every vertex in index order.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the number of edges currently stored.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the weight between `m` and `n`.
    ///
    /// The diagonal reads as `0.0` and absent edges read as [`NO_EDGE`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either index is out of
    /// range.
    pub fn weight(&self, m: usize, n: usize) -> Result<f64> {
        self.check_vertex(m)?;
        self.check_vertex(n)?;
        Ok(self.weights.get(m, n))
    }

    /// Returns `true` when `m` and `n` are distinct and joined by an edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either index is out of
    /// range.
    pub fn has_edge(&self, m: usize, n: usize) -> Result<bool> {
        Ok(m != n && self.weight(m, n)?.is_finite())
    }

    /// Iterates over every edge once as `(low, high, weight)` with
    /// `low < high`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.weights.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .skip(row.saturating_add(1))
                .filter(|(_, weight)| weight.is_finite())
                .map(move |(col, weight)| (row, col, *weight))
        })
    }

    /// Iterates over the neighbours of `vertex` as `(neighbour, weight)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `vertex` is out of range.
    pub fn neighbours(&self, vertex: usize) -> Result<impl Iterator<Item = (usize, f64)> + '_> {
        self.check_vertex(vertex)?;
        Ok(self
            .weights
            .row(vertex)
            .iter()
            .enumerate()
            .filter(move |(other, weight)| *other != vertex && weight.is_finite())
            .map(|(other, weight)| (other, *weight)))
    }

    /// Inserts, re-weights, or removes the edge between `m` and `n`.
    ///
    /// A weight of `0.0` removes the edge if one exists and is otherwise a
    /// no-op. A positive finite weight creates the edge or overwrites its
    /// weight. Both directions of the matrix are always written together.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] when `weight` is negative,
    /// infinite, or NaN, and [`GraphError::InvalidVertex`] when `m == n` or
    /// either index is out of range. The weight is checked first. A failed
    /// call leaves the graph unchanged.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::{EdgeChange, NO_EDGE, WeightedGraph};
    ///
    /// let mut graph = WeightedGraph::new(2);
    /// assert_eq!(graph.set_edge(0, 1, 1.5)?, EdgeChange::Inserted);
    /// assert_eq!(graph.set_edge(1, 0, 2.5)?, EdgeChange::Updated);
    /// assert_eq!(graph.set_edge(0, 1, 0.0)?, EdgeChange::Removed);
    /// assert_eq!(graph.weight(0, 1)?, NO_EDGE);
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    pub fn set_edge(&mut self, m: usize, n: usize, weight: f64) -> Result<EdgeChange> {
        let change = self.apply_edge(m, n, weight).inspect_err(|err| {
            debug!(m, n, weight, code = %err.code(), "edge mutation rejected");
        })?;
        trace!(m, n, weight, change = change.as_str(), "edge mutation applied");
        #[cfg(feature = "metrics")]
        metrics::counter!("graph_edge_mutations", "change" => change.as_str()).increment(1);
        Ok(change)
    }

    /// Removes the edge between `m` and `n` if present.
    ///
    /// Equivalent to `set_edge(m, n, 0.0)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `m == n` or either index is
    /// out of range.
    pub fn remove_edge(&mut self, m: usize, n: usize) -> Result<EdgeChange> {
        self.set_edge(m, n, 0.0)
    }

    fn apply_edge(&mut self, m: usize, n: usize, weight: f64) -> Result<EdgeChange> {
        validate_weight(weight)?;
        self.check_pair(m, n)?;

        let existed = self.weights.get(m, n).is_finite();
        let change = match (weight == 0.0, existed) {
            (true, false) => return Ok(EdgeChange::Unchanged),
            (true, true) => {
                self.weights.set_symmetric(m, n, NO_EDGE);
                self.adjust_counts(m, n, false);
                EdgeChange::Removed
            }
            (false, _) => {
                if !existed {
                    self.adjust_counts(m, n, true);
                }
                self.weights.set_symmetric(m, n, weight);
                if existed {
                    EdgeChange::Updated
                } else {
                    EdgeChange::Inserted
                }
            }
        };
        Ok(change)
    }

    fn adjust_counts(&mut self, m: usize, n: usize, grow: bool) {
        for vertex in [m, n] {
            if let Some(degree) = self.degrees.get_mut(vertex) {
                *degree = if grow {
                    degree.saturating_add(1)
                } else {
                    degree.saturating_sub(1)
                };
            }
        }
        self.edge_count = if grow {
            self.edge_count.saturating_add(1)
        } else {
            self.edge_count.saturating_sub(1)
        };
    }

    pub(crate) const fn check_vertex(&self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, vertex_count))
        }
    }

    fn check_pair(&self, m: usize, n: usize) -> Result<()> {
        if m == n {
            return Err(GraphError::self_loop(m));
        }
        self.check_vertex(m)?;
        self.check_vertex(n)
    }

    /// Splits the graph into its matrix and the MST scratch buffer.
    pub(crate) fn prim_parts(&mut self) -> (&WeightMatrix, &mut PrimScratch) {
        (&self.weights, &mut self.scratch)
    }

    /// Visited markers left behind by the most recent MST traversal.
    pub(crate) fn visited(&self) -> &[bool] {
        self.scratch.visited()
    }
}

fn validate_weight(weight: f64) -> Result<()> {
    if weight.is_nan() || weight < 0.0 || weight == NO_EDGE {
        Err(GraphError::InvalidWeight { weight })
    } else {
        Ok(())
    }
}
