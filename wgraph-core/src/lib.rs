//! Dense weighted graph core library.
//!
//! Provides [`WeightedGraph`], an undirected graph over a fixed number of
//! vertices stored as an adjacency matrix, with incremental degree and edge
//! count bookkeeping, minimum spanning tree weights via Prim's algorithm, and
//! a connectivity check built on the same traversal.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the graph emits:
//!
//! - `graph_edge_mutations` (counter, labelled by `change`)
//! - `graph_mst_runs` (counter)
//! - `graph_mst_visited_vertices` (histogram)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result, VertexRejection},
    graph::{DEFAULT_VERTEX_COUNT, EdgeChange, NO_EDGE, WeightedGraph},
};
