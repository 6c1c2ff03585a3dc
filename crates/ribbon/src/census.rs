//! Census driver: enumerate, filter connected, classify, bin.
//!
//! Purpose
//! - Own the validated problem (`Census`): shape, fixed vertex permutation and
//!   resolved histogram range, built once from a `RibbonCfg`.
//! - Drive the enumerator branch by branch (partner of arrow 0), either on the
//!   calling thread or as independent rayon tasks, and merge per-branch tallies.
//!
//! Notes
//! - Each branch gets its own scorer (connectivity/face buffers and tally) and,
//!   when parallel, its own enumerator clone. Only the vertex permutation is
//!   shared, read-only.
//! - The deadline is checked before each branch starts. A run that misses it
//!   returns `DeadlineExceeded`; partial tallies are discarded.

use std::time::{Duration, Instant};

use num::BigUint;
use rayon::prelude::*;

use crate::bounds::{matching_count, max_connected_genus};
use crate::cfg::{Execution, RibbonCfg, SearchCfg};
use crate::connectivity::ConnectivityChecker;
use crate::error::RibbonError;
use crate::faces::FaceCounter;
use crate::genus::classify;
use crate::histogram::GenusHistogram;
use crate::pairing::{MatchingVisitor, PairingEnumerator};
use crate::perm::Permutation;
use crate::vertex::vertex_permutation;

/// Validated census problem.
#[derive(Clone, Debug)]
pub struct Census {
    vertex_count: usize,
    valence: usize,
    arrow_count: usize,
    vertex: Permutation,
    /// All-zero bins `0..=max_genus`, cloned into every tally.
    empty: GenusHistogram,
}

impl Census {
    pub fn new(cfg: RibbonCfg) -> Result<Self, RibbonError> {
        let vertex = vertex_permutation(cfg.vertex_count, cfg.valence)?;
        let arrow_count = vertex.len();
        let max_genus = match cfg.max_genus {
            // a connected graph has genus at most E/2, well below the arrow count
            Some(g) if g > arrow_count => {
                return Err(RibbonError::invalid(format!(
                    "max_genus {g} exceeds the arrow count {arrow_count}"
                )))
            }
            Some(g) => g,
            None => max_connected_genus(cfg.vertex_count, arrow_count),
        };
        Ok(Self {
            vertex_count: cfg.vertex_count,
            valence: cfg.valence,
            arrow_count,
            vertex,
            empty: GenusHistogram::new(max_genus)?,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn valence(&self) -> usize {
        self.valence
    }

    pub fn arrow_count(&self) -> usize {
        self.arrow_count
    }

    pub fn max_genus(&self) -> usize {
        self.empty.max_genus()
    }

    pub fn vertex_permutation(&self) -> &Permutation {
        &self.vertex
    }

    /// Genus of a single matching, or `None` if it is disconnected.
    pub fn genus_of(&self, edge: &Permutation) -> Result<Option<usize>, RibbonError> {
        if edge.len() != self.arrow_count || !edge.is_fixed_point_free_involution() {
            return Err(RibbonError::invalid(format!(
                "expected a perfect matching on {} arrows",
                self.arrow_count
            )));
        }
        let mut scorer = Scorer::new(self);
        scorer.score(edge)
    }

    /// Enumerate every matching and bin the connected ones by genus.
    pub fn run(&self, scfg: SearchCfg) -> Result<CensusReport, RibbonError> {
        let started = Instant::now();
        let mut root = PairingEnumerator::new(self.arrow_count)?;
        let branches = root.branches();
        tracing::info!(
            vertex_count = self.vertex_count,
            valence = self.valence,
            arrows = self.arrow_count,
            branches = branches.len(),
            execution = ?scfg.execution,
            "census start"
        );

        let tally = match scfg.execution {
            Execution::Sequential => {
                let mut total = Tally::new(self.empty.clone());
                for partner in branches {
                    check_deadline(started, scfg.deadline)?;
                    total.merge(&self.branch_tally(&mut root, partner)?);
                }
                total
            }
            Execution::Parallel => branches
                .into_par_iter()
                .map(|partner| {
                    check_deadline(started, scfg.deadline)?;
                    let mut enumerator = root.clone();
                    self.branch_tally(&mut enumerator, partner)
                })
                .collect::<Result<Vec<_>, _>>()?
                .iter()
                .fold(Tally::new(self.empty.clone()), |mut acc, t| {
                    acc.merge(t);
                    acc
                }),
        };

        let expected = matching_count(self.arrow_count);
        if tally.matchings != expected {
            return Err(RibbonError::inconsistent(
                format!(
                    "enumerated {} matchings, expected (n−1)!! = {expected}",
                    tally.matchings
                ),
                &[],
            ));
        }

        let report = CensusReport {
            vertex_count: self.vertex_count,
            valence: self.valence,
            arrow_count: self.arrow_count,
            execution: scfg.execution,
            histogram: tally.histogram,
            matchings: tally.matchings,
            disconnected: tally.disconnected,
        };
        tracing::info!(
            matchings = %report.matchings,
            connected = %report.connected(),
            disconnected = %report.disconnected,
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "census done"
        );
        Ok(report)
    }

    fn branch_tally(
        &self,
        enumerator: &mut PairingEnumerator,
        partner: usize,
    ) -> Result<Tally, RibbonError> {
        let mut scorer = Scorer::new(self);
        enumerator.run_branch(partner, &mut scorer)?;
        tracing::debug!(
            partner,
            matchings = %scorer.tally.matchings,
            disconnected = %scorer.tally.disconnected,
            "branch done"
        );
        Ok(scorer.tally)
    }
}

fn check_deadline(started: Instant, deadline: Option<Duration>) -> Result<(), RibbonError> {
    match deadline {
        Some(limit) if started.elapsed() >= limit => Err(RibbonError::DeadlineExceeded {
            elapsed: started.elapsed(),
        }),
        _ => Ok(()),
    }
}

/// Outcome of a full census.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CensusReport {
    pub vertex_count: usize,
    pub valence: usize,
    pub arrow_count: usize,
    pub execution: Execution,
    pub histogram: GenusHistogram,
    /// All leaves visited: `(arrow_count − 1)!!`.
    pub matchings: BigUint,
    pub disconnected: BigUint,
}

impl CensusReport {
    pub fn connected(&self) -> BigUint {
        self.histogram.total()
    }

    pub fn max_genus(&self) -> usize {
        self.histogram.max_genus()
    }
}

/// Partial counts from one branch (or a merge of several).
#[derive(Clone, Debug)]
struct Tally {
    histogram: GenusHistogram,
    matchings: BigUint,
    disconnected: BigUint,
}

impl Tally {
    fn new(histogram: GenusHistogram) -> Self {
        Self {
            histogram,
            matchings: BigUint::default(),
            disconnected: BigUint::default(),
        }
    }

    fn merge(&mut self, other: &Tally) {
        self.histogram.merge(&other.histogram);
        self.matchings += &other.matchings;
        self.disconnected += &other.disconnected;
    }
}

/// Leaf pipeline: connectivity → faces → genus → histogram.
struct Scorer<'a> {
    census: &'a Census,
    connectivity: ConnectivityChecker,
    faces: FaceCounter,
    tally: Tally,
}

impl<'a> Scorer<'a> {
    fn new(census: &'a Census) -> Self {
        Self {
            census,
            connectivity: ConnectivityChecker::new(census.vertex_count, census.valence),
            faces: FaceCounter::new(census.arrow_count),
            tally: Tally::new(census.empty.clone()),
        }
    }

    fn score(&mut self, edge: &Permutation) -> Result<Option<usize>, RibbonError> {
        if !self.connectivity.is_connected(edge) {
            return Ok(None);
        }
        let faces = self.faces.count(&self.census.vertex, edge);
        classify(self.census.vertex_count, self.census.arrow_count, faces, edge).map(Some)
    }
}

impl MatchingVisitor for Scorer<'_> {
    fn visit(&mut self, edge: &Permutation) -> Result<(), RibbonError> {
        self.tally.matchings += 1u32;
        match self.score(edge)? {
            Some(genus) => self.tally.histogram.record(genus, edge),
            None => {
                self.tally.disconnected += 1u32;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
