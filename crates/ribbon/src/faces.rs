//! Faces as orbits of `vertex ∘ edge` (edge first, then vertex).

use crate::perm::Permutation;

/// Orbit counter with a reusable visited buffer.
#[derive(Clone, Debug)]
pub struct FaceCounter {
    travel: Vec<bool>,
}

impl FaceCounter {
    pub fn new(arrow_count: usize) -> Self {
        Self {
            travel: vec![false; arrow_count],
        }
    }

    /// Number of closed walks `l ← vertex[edge[l]]`. `edge` need not be an
    /// involution; any permutation of the same length works.
    ///
    /// # Panics
    ///
    /// If `vertex` and `edge` have different lengths.
    pub fn count(&mut self, vertex: &Permutation, edge: &Permutation) -> usize {
        assert_eq!(vertex.len(), edge.len(), "face count: length mismatch");
        self.travel.clear();
        self.travel.resize(vertex.len(), false);
        let mut faces = 0;
        for start in 0..vertex.len() {
            if self.travel[start] {
                continue;
            }
            let mut l = start;
            loop {
                self.travel[l] = true;
                l = vertex.apply(edge.apply(l));
                if l == start {
                    break;
                }
            }
            faces += 1;
        }
        faces
    }
}

/// One-shot [`FaceCounter::count`]; panics on a length mismatch.
pub fn face_count(vertex: &Permutation, edge: &Permutation) -> usize {
    FaceCounter::new(vertex.len()).count(vertex, edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::vertex_permutation;

    #[test]
    fn identity_edge_gives_vertex_cycles() {
        for (v, d) in [(1, 4), (2, 3), (5, 4), (3, 2)] {
            let vp = vertex_permutation(v, d).unwrap();
            let id = Permutation::identity(v * d);
            assert_eq!(face_count(&vp, &id), v);
        }
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_lengths_panic() {
        face_count(&Permutation::identity(4), &Permutation::identity(2));
    }

    #[test]
    fn one_vertex_four_arrows() {
        let vp = vertex_permutation(1, 4).unwrap();
        let planar = Permutation::from_images(vec![1, 0, 3, 2]).unwrap();
        let torus = Permutation::from_images(vec![2, 3, 0, 1]).unwrap();
        assert_eq!(face_count(&vp, &planar), 3);
        assert_eq!(face_count(&vp, &torus), 1);
    }

    #[test]
    fn matches_cycle_count_of_product() {
        let vp = vertex_permutation(2, 4).unwrap();
        let e = Permutation::from_images(vec![5, 7, 6, 4, 3, 0, 2, 1]).unwrap();
        let mut counter = FaceCounter::new(8);
        assert_eq!(counter.count(&vp, &e), vp.compose(&e).cycle_count());
        // buffer reuse gives the same answer
        assert_eq!(counter.count(&vp, &e), vp.compose(&e).cycle_count());
    }
}
