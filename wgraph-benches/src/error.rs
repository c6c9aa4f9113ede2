//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise while preparing benchmark
//! graphs so that setup functions can propagate failures with `?` instead of
//! using `.expect()`.

use crate::source::SyntheticError;
use wgraph_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A graph operation rejected its input.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
