//! Reusable per-vertex buffers for Prim's algorithm.

use crate::graph::NO_EDGE;

/// Visited markers and best-known connection weights, one slot per vertex.
///
/// Contents are only meaningful during a traversal, except that `visited`
/// keeps the last traversal's component until the next one starts.
#[derive(Clone, Debug)]
pub(crate) struct PrimScratch {
    visited: Vec<bool>,
    keys: Vec<f64>,
}

impl PrimScratch {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            keys: vec![NO_EDGE; vertex_count],
        }
    }

    pub(crate) fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Clears both buffers and marks `origin` as the only visited vertex.
    pub(crate) fn reset(&mut self, origin: usize) {
        self.visited.fill(false);
        self.keys.fill(NO_EDGE);
        if let Some(slot) = self.visited.get_mut(origin) {
            *slot = true;
        }
    }

    /// Marks `vertex` visited and lowers the keys of unvisited vertices that
    /// `row` reaches more cheaply.
    pub(crate) fn absorb(&mut self, vertex: usize, row: &[f64]) {
        if let Some(slot) = self.visited.get_mut(vertex) {
            *slot = true;
        }
        for ((key, &seen), &weight) in self.keys.iter_mut().zip(&self.visited).zip(row) {
            if !seen && weight < *key {
                *key = weight;
            }
        }
    }

    /// Returns the unvisited vertex with the strictly smallest finite key,
    /// preferring the lowest index among equals.
    pub(crate) fn cheapest_frontier(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (vertex, (&key, &seen)) in self.keys.iter().zip(&self.visited).enumerate() {
            if seen || !key.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, current)| key < current) {
                best = Some((vertex, key));
            }
        }
        best
    }
}
