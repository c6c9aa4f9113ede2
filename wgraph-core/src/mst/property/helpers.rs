//! Shared helper functions for MST property-based tests.

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Compares two accumulated weights with a relative tolerance.
///
/// Prim and Kruskal add the same edges in different orders, so their `f64`
/// sums may differ in the last few bits.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= scale * 1e-9
}
