//! Permutations on the arrow set `[0, n)`.
//!
//! Purpose
//! - One owned image vector per permutation; the bijection invariant is
//!   checked at construction (`from_images`) and preserved by every mutator.
//! - The enumerator mutates an edge buffer through `pair`/`unpair`, which swap
//!   two fixed points into a transposition and back. Unmatched arrows are
//!   fixed points, so the buffer is a valid involution at every moment.

use crate::error::RibbonError;

/// Bijection `i ↦ images[i]` on `[0, len)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    pub fn identity(len: usize) -> Self {
        Self {
            images: (0..len).collect(),
        }
    }

    /// Validate that `images` is a bijection on `[0, images.len())`.
    pub fn from_images(images: Vec<usize>) -> Result<Self, RibbonError> {
        let n = images.len();
        let mut seen = vec![false; n];
        for (i, &j) in images.iter().enumerate() {
            if j >= n {
                return Err(RibbonError::invalid(format!(
                    "image {j} of {i} is outside [0, {n})"
                )));
            }
            if seen[j] {
                return Err(RibbonError::invalid(format!(
                    "image {j} appears twice; not a bijection"
                )));
            }
            seen[j] = true;
        }
        Ok(Self { images })
    }

    /// Caller guarantees `images` is a bijection.
    pub(crate) fn from_images_unchecked(images: Vec<usize>) -> Self {
        debug_assert!(Self::from_images(images.clone()).is_ok());
        Self { images }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    pub fn apply(&self, i: usize) -> usize {
        self.images[i]
    }

    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    ///
    /// # Panics
    ///
    /// If the two permutations have different lengths.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        assert_eq!(self.len(), other.len(), "compose: length mismatch");
        Self {
            images: other.images.iter().map(|&j| self.images[j]).collect(),
        }
    }

    pub fn inverse(&self) -> Permutation {
        let mut inv = vec![0; self.len()];
        for (i, &j) in self.images.iter().enumerate() {
            inv[j] = i;
        }
        Self { images: inv }
    }

    /// Number of orbits (fixed points count as orbits of length one).
    pub fn cycle_count(&self) -> usize {
        let mut seen = vec![false; self.len()];
        let mut cycles = 0;
        for start in 0..self.len() {
            if seen[start] {
                continue;
            }
            let mut l = start;
            while !seen[l] {
                seen[l] = true;
                l = self.images[l];
            }
            cycles += 1;
        }
        cycles
    }

    /// Perfect matching check: `p∘p = id` and `p(i) != i` for every `i`.
    pub fn is_fixed_point_free_involution(&self) -> bool {
        self.images
            .iter()
            .enumerate()
            .all(|(i, &j)| j != i && self.images[j] == i)
    }

    /// Turn fixed points `a`, `b` into the transposition `(a b)`.
    #[inline]
    pub(crate) fn pair(&mut self, a: usize, b: usize) {
        debug_assert!(self.images[a] == a && self.images[b] == b);
        self.images[a] = b;
        self.images[b] = a;
    }

    /// Undo `pair(a, b)`.
    #[inline]
    pub(crate) fn unpair(&mut self, a: usize, b: usize) {
        debug_assert!(self.images[a] == b && self.images[b] == a);
        self.images[a] = a;
        self.images[b] = b;
    }
}
