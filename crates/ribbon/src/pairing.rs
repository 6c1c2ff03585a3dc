//! Perfect-matching enumerator (anchor on the smallest unmatched arrow).
//!
//! Model
//! - State: an edge buffer (`Permutation`, unmatched arrows are fixed points)
//!   and the ascending list of unmatched arrows.
//! - Step: take the smallest unmatched arrow `a`; for each other unmatched `b`
//!   pair `a↔b`, drop both from the list, recurse, then undo both edits.
//! - Anchoring on the smallest arrow fixes the order in which pairs are chosen,
//!   so each unordered matching is reached by exactly one path:
//!   `(n−1)!!` leaves in total.
//!
//! The visitor sees the buffer only at leaves, where it is a fixed-point-free
//! involution. A visitor error stops the search; the buffer and list are
//! restored on the way out so the enumerator stays reusable.

use crate::error::RibbonError;
use crate::perm::Permutation;

/// Callback for complete matchings.
pub trait MatchingVisitor {
    fn visit(&mut self, edge: &Permutation) -> Result<(), RibbonError>;
}

impl<F> MatchingVisitor for F
where
    F: FnMut(&Permutation) -> Result<(), RibbonError>,
{
    fn visit(&mut self, edge: &Permutation) -> Result<(), RibbonError> {
        self(edge)
    }
}

/// Backtracking enumerator over all perfect matchings of `[0, n)`.
#[derive(Clone, Debug)]
pub struct PairingEnumerator {
    edge: Permutation,
    unmatched: Vec<usize>,
}

impl PairingEnumerator {
    pub fn new(arrow_count: usize) -> Result<Self, RibbonError> {
        if arrow_count % 2 == 1 {
            return Err(RibbonError::invalid(format!(
                "cannot pair an odd number of arrows ({arrow_count})"
            )));
        }
        Ok(Self {
            edge: Permutation::identity(arrow_count),
            unmatched: (0..arrow_count).collect(),
        })
    }

    pub fn arrow_count(&self) -> usize {
        self.edge.len()
    }

    /// Partners available to the anchor arrow 0; one independent subtree each.
    pub fn branches(&self) -> Vec<usize> {
        self.unmatched.iter().skip(1).copied().collect()
    }

    /// Visit every perfect matching once.
    pub fn run<V: MatchingVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<(), RibbonError> {
        self.descend(visitor)
    }

    /// Visit the matchings that pair the anchor arrow with `partner`.
    pub fn run_branch<V: MatchingVisitor + ?Sized>(
        &mut self,
        partner: usize,
        visitor: &mut V,
    ) -> Result<(), RibbonError> {
        let Some(&anchor) = self.unmatched.first() else {
            return Err(RibbonError::invalid("no arrows to branch on"));
        };
        let pos = self
            .unmatched
            .iter()
            .skip(1)
            .position(|&b| b == partner)
            .ok_or_else(|| {
                RibbonError::invalid(format!("arrow {partner} is not a partner of {anchor}"))
            })?;
        self.unmatched.remove(0);
        let res = self.try_pair(anchor, pos, visitor);
        self.unmatched.insert(0, anchor);
        res
    }

    fn descend<V: MatchingVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<(), RibbonError> {
        if self.unmatched.is_empty() {
            return visitor.visit(&self.edge);
        }
        let anchor = self.unmatched.remove(0);
        let mut res = Ok(());
        for i in 0..self.unmatched.len() {
            res = self.try_pair(anchor, i, visitor);
            if res.is_err() {
                break;
            }
        }
        self.unmatched.insert(0, anchor);
        res
    }

    /// Pair `anchor` with `unmatched[i]`, recurse, undo.
    fn try_pair<V: MatchingVisitor + ?Sized>(
        &mut self,
        anchor: usize,
        i: usize,
        visitor: &mut V,
    ) -> Result<(), RibbonError> {
        let partner = self.unmatched.remove(i);
        self.edge.pair(anchor, partner);
        let res = self.descend(visitor);
        self.edge.unpair(anchor, partner);
        self.unmatched.insert(i, partner);
        res
    }
}
