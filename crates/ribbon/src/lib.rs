//! Genus census of ribbon graphs with uniform valence.
//!
//! A ribbon graph on `n = vertex_count · valence` arrows (half-edges) is a pair
//! of permutations: a fixed vertex permutation (one `valence`-cycle per vertex)
//! and an edge permutation (a perfect matching of the arrows). Faces are the
//! orbits of `vertex ∘ edge`, and `χ = V − E + F` gives the genus.
//!
//! Pipeline
//! - `vertex`: build the fixed vertex permutation.
//! - `pairing`: enumerate every perfect matching once (`(n−1)!!` leaves).
//! - `connectivity`, `faces`, `genus`: score one leaf.
//! - `histogram`: exact per-genus counts.
//! - `census`: validated problem, sequential or per-branch parallel driver.
//!
//! The search is exponential in `n`; it is meant for small shapes.

pub mod bounds;
pub mod census;
pub mod cfg;
pub mod connectivity;
pub mod error;
pub mod faces;
pub mod genus;
pub mod histogram;
pub mod pairing;
pub mod perm;
pub mod vertex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use census::{Census, CensusReport};
pub use cfg::{Execution, RibbonCfg, SearchCfg};
pub use error::RibbonError;
pub use histogram::GenusHistogram;
pub use perm::Permutation;

/// Common exports for callers.
pub mod prelude {
    pub use crate::bounds::{double_factorial, matching_count, max_connected_genus};
    pub use crate::census::{Census, CensusReport};
    pub use crate::cfg::{Execution, RibbonCfg, SearchCfg};
    pub use crate::connectivity::{is_connected, ConnectivityChecker};
    pub use crate::error::RibbonError;
    pub use crate::faces::{face_count, FaceCounter};
    pub use crate::genus::{classify, euler_characteristic};
    pub use crate::histogram::GenusHistogram;
    pub use crate::pairing::{MatchingVisitor, PairingEnumerator};
    pub use crate::perm::Permutation;
    pub use crate::vertex::{vertex_of, vertex_permutation};
    pub use num::BigUint;
}

/// Census with default search settings (sequential, no deadline).
pub fn count_genus(vertex_count: usize, valence: usize) -> Result<CensusReport, RibbonError> {
    Census::new(RibbonCfg::new(vertex_count, valence))?.run(SearchCfg::default())
}
