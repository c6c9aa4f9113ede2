//! Dense symmetric weight storage.

use super::NO_EDGE;

/// Row-major `n × n` buffer of edge weights.
///
/// The diagonal holds `0.0`, absent edges hold [`NO_EDGE`]. Callers are
/// expected to have bounds-checked indices; writes always touch both
/// `(row, col)` and `(col, row)`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WeightMatrix {
    order: usize,
    cells: Vec<f64>,
}

impl WeightMatrix {
    /// Allocates a matrix for `order` vertices with no edges.
    pub(crate) fn new(order: usize) -> Self {
        let mut cells = vec![NO_EDGE; order.saturating_mul(order)];
        for vertex in 0..order {
            if let Some(cell) = cells.get_mut(vertex * order + vertex) {
                *cell = 0.0;
            }
        }
        Self { order, cells }
    }

    pub(crate) const fn order(&self) -> usize {
        self.order
    }

    /// Returns the weight stored at `(row, col)`, or [`NO_EDGE`] for an index
    /// outside the matrix.
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.index(row, col)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(NO_EDGE)
    }

    /// Writes `weight` to both `(row, col)` and `(col, row)`.
    pub(crate) fn set_symmetric(&mut self, row: usize, col: usize, weight: f64) {
        for (r, c) in [(row, col), (col, row)] {
            if let Some(cell) = self.index(r, c).and_then(|idx| self.cells.get_mut(idx)) {
                *cell = weight;
            }
        }
    }

    /// Returns one row of the matrix.
    pub(crate) fn row(&self, row: usize) -> &[f64] {
        let start = row.saturating_mul(self.order);
        self.cells
            .get(start..start.saturating_add(self.order))
            .unwrap_or(&[])
    }

    /// Iterates over all rows in index order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.order).map(|row| self.row(row))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.order && col < self.order).then(|| row * self.order + col)
    }
}
