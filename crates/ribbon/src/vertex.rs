//! Fixed vertex permutation: block `[v·d, (v+1)·d)` is one cycle of length `d`.

use crate::error::RibbonError;
use crate::perm::Permutation;

/// Vertex index of `arrow` for uniform valence.
#[inline]
pub fn vertex_of(arrow: usize, valence: usize) -> usize {
    arrow / valence
}

/// Build the vertex permutation for `vertex_count` vertices of degree `valence`.
///
/// Arrow `v·d + i` maps to `v·d + i + 1`; the last arrow of a block closes the
/// cycle back to `v·d`. Rejects empty shapes and odd arrow totals.
pub fn vertex_permutation(vertex_count: usize, valence: usize) -> Result<Permutation, RibbonError> {
    if vertex_count == 0 || valence == 0 {
        return Err(RibbonError::invalid(format!(
            "vertex_count and valence must be positive (got {vertex_count}, {valence})"
        )));
    }
    let arrows = vertex_count
        .checked_mul(valence)
        .ok_or_else(|| RibbonError::invalid("vertex_count · valence overflows usize"))?;
    if arrows % 2 == 1 {
        return Err(RibbonError::invalid(format!(
            "arrow count {vertex_count}·{valence} = {arrows} is odd; arrows cannot pair into edges"
        )));
    }
    let images = (0..arrows)
        .map(|a| {
            let base = a - a % valence;
            base + (a - base + 1) % valence
        })
        .collect();
    Ok(Permutation::from_images_unchecked(images))
}
