//! Exact genus histogram.
//!
//! Bins `0..=max_genus` hold `BigUint` counts: the number of leaves grows like
//! `(n−1)!!`, so a fixed-width or floating accumulator would eventually drop
//! increments. Out-of-range genera are an error, never clamped.

use num::{BigUint, Zero};

use crate::error::RibbonError;
use crate::perm::Permutation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenusHistogram {
    bins: Vec<BigUint>,
}

impl GenusHistogram {
    pub fn new(max_genus: usize) -> Result<Self, RibbonError> {
        let len = max_genus.checked_add(1).ok_or_else(|| {
            RibbonError::invalid(format!("max_genus {max_genus} has no bin count"))
        })?;
        Ok(Self {
            bins: vec![BigUint::zero(); len],
        })
    }

    pub fn max_genus(&self) -> usize {
        self.bins.len() - 1
    }

    /// Add one graph of genus `genus`; `edge` is only used for the error report.
    pub fn record(&mut self, genus: usize, edge: &Permutation) -> Result<(), RibbonError> {
        let max_genus = self.max_genus();
        let bin = self
            .bins
            .get_mut(genus)
            .ok_or_else(|| RibbonError::GenusOutOfRange {
                genus,
                max_genus,
                edge: edge.images().to_vec(),
            })?;
        *bin += 1u32;
        Ok(())
    }

    pub fn count(&self, genus: usize) -> BigUint {
        self.bins.get(genus).cloned().unwrap_or_default()
    }

    /// Sum over all bins: the number of connected graphs recorded.
    pub fn total(&self) -> BigUint {
        self.bins.iter().sum()
    }

    /// Elementwise sum. The result keeps the wider of the two ranges.
    pub fn merge(&mut self, other: &GenusHistogram) {
        if other.bins.len() > self.bins.len() {
            self.bins.resize(other.bins.len(), BigUint::zero());
        }
        for (mine, theirs) in self.bins.iter_mut().zip(&other.bins) {
            *mine += theirs;
        }
    }

    /// `(genus, count)` in increasing genus order, including empty bins.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BigUint)> + '_ {
        self.bins.iter().enumerate()
    }

    /// Largest genus with a non-zero count.
    pub fn top_genus(&self) -> Option<usize> {
        self.bins.iter().rposition(|c| !c.is_zero())
    }

    /// Euler characteristic shared by every graph in bin `genus`.
    pub fn euler_characteristic(genus: usize) -> i64 {
        2 - 2 * genus as i64
    }
}
