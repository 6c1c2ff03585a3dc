//! Closed forms for the size of the search.

use num::{BigUint, One};

/// `n!! = n · (n−2) · (n−4) · …`, with `0!! = 1` and `1!! = 1`.
pub fn double_factorial(n: usize) -> BigUint {
    let mut acc = BigUint::one();
    let mut k = n;
    while k > 1 {
        acc *= k;
        k -= 2;
    }
    acc
}

/// Number of perfect matchings on `arrow_count` arrows: `(arrow_count − 1)!!`.
/// Zero for an odd count.
pub fn matching_count(arrow_count: usize) -> BigUint {
    if arrow_count % 2 == 1 {
        return BigUint::default();
    }
    if arrow_count == 0 {
        return BigUint::one();
    }
    double_factorial(arrow_count - 1)
}

/// Largest genus of a connected ribbon graph with `vertex_count` vertices and
/// `arrow_count / 2` edges.
///
/// A connected graph has at least one face, so `χ ≥ V − E + 1` and
/// `g = (2 − χ)/2 ≤ (E − V + 1)/2`. A connected graph has `E ≥ V − 1`, so
/// shapes below that are reported as genus 0.
pub fn max_connected_genus(vertex_count: usize, arrow_count: usize) -> usize {
    let edges = arrow_count / 2;
    (edges + 1).saturating_sub(vertex_count) / 2
}
