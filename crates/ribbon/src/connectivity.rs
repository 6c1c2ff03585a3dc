//! Connectivity of the vertex multigraph induced by a matching.
//!
//! Reachability closure from vertex 0: pop a reached vertex, follow each of its
//! arrows through the matching, mark the partner's vertex. Self-loops land on
//! the vertex itself and add nothing. Buffers are reused across calls since
//! this runs once per leaf of the enumeration.

use crate::perm::Permutation;
use crate::vertex::vertex_of;

#[derive(Clone, Debug)]
pub struct ConnectivityChecker {
    vertex_count: usize,
    valence: usize,
    reached: Vec<bool>,
    stack: Vec<usize>,
}

impl ConnectivityChecker {
    pub fn new(vertex_count: usize, valence: usize) -> Self {
        Self {
            vertex_count,
            valence,
            reached: vec![false; vertex_count],
            stack: Vec::with_capacity(vertex_count),
        }
    }

    /// True iff every vertex is reachable from vertex 0 along matched arrow pairs.
    pub fn is_connected(&mut self, edge: &Permutation) -> bool {
        debug_assert_eq!(edge.len(), self.vertex_count * self.valence);
        if self.vertex_count <= 1 {
            return true;
        }
        self.reached.fill(false);
        self.stack.clear();
        self.reached[0] = true;
        self.stack.push(0);
        let mut reached = 1;
        while let Some(v) = self.stack.pop() {
            let first = v * self.valence;
            for arrow in first..first + self.valence {
                let w = vertex_of(edge.apply(arrow), self.valence);
                if !self.reached[w] {
                    self.reached[w] = true;
                    reached += 1;
                    if reached == self.vertex_count {
                        return true;
                    }
                    self.stack.push(w);
                }
            }
        }
        false
    }
}

/// One-shot convenience wrapper around `ConnectivityChecker`.
pub fn is_connected(edge: &Permutation, vertex_count: usize, valence: usize) -> bool {
    ConnectivityChecker::new(vertex_count, valence).is_connected(edge)
}
