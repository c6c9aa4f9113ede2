//! Benchmark support crate for wgraph.
//!
//! Provides the seeded synthetic graph generator and parameter types used by
//! the Criterion benchmarks for Prim MST weight, connectivity, and edge
//! mutation.

pub mod error;
pub mod params;
pub mod source;
