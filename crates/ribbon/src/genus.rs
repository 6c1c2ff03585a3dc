//! Genus from the Euler characteristic `χ = V − E + F`, `g = (2 − χ)/2`.

use crate::error::RibbonError;
use crate::perm::Permutation;

/// `χ = V − arrows/2 + F`.
#[inline]
pub fn euler_characteristic(vertex_count: usize, arrow_count: usize, faces: usize) -> i64 {
    vertex_count as i64 - (arrow_count / 2) as i64 + faces as i64
}

/// Genus of a connected ribbon graph.
///
/// A negative or half-integral genus cannot come from a connected closed
/// orientable surface; it is reported as `Inconsistent` with `edge` attached.
pub fn classify(
    vertex_count: usize,
    arrow_count: usize,
    faces: usize,
    edge: &Permutation,
) -> Result<usize, RibbonError> {
    let chi = euler_characteristic(vertex_count, arrow_count, faces);
    let twice_genus = 2 - chi;
    if twice_genus < 0 {
        return Err(RibbonError::inconsistent(
            format!("negative genus: χ = {chi} > 2"),
            edge.images(),
        ));
    }
    if twice_genus % 2 != 0 {
        return Err(RibbonError::inconsistent(
            format!("non-integer genus: χ = {chi} is odd"),
            edge.images(),
        ));
    }
    Ok((twice_genus / 2) as usize)
}
