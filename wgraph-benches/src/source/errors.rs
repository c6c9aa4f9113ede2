//! Error types for synthetic benchmark graph generation.

use wgraph_core::GraphError;

/// Errors that may occur while generating a synthetic graph.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// A floating-point generator parameter was invalid.
    #[error("invalid floating-point parameter `{parameter}`")]
    InvalidFloatParameter {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// The graph rejected a generated edge.
    #[error("generated edge was rejected: {0}")]
    Graph(#[from] GraphError),
}
