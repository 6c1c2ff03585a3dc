//! Error type shared by the census pipeline.
//!
//! - `InvalidConfig`: rejected before any enumeration starts.
//! - `Inconsistent`, `GenusOutOfRange`: a scored matching broke an invariant of
//!   the connectivity/face/genus chain. These carry the offending edge
//!   permutation (as its image list) and are never retried; the search is
//!   deterministic and would hit the same leaf again.
//! - `DeadlineExceeded`: the optional wall-clock budget ran out between
//!   top-level branches.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RibbonError {
    #[error("invalid census config: {reason}")]
    InvalidConfig { reason: String },

    #[error("internal inconsistency: {reason} (edge permutation {edge:?})")]
    Inconsistent { reason: String, edge: Vec<usize> },

    #[error("genus {genus} exceeds histogram capacity {max_genus} (edge permutation {edge:?})")]
    GenusOutOfRange {
        genus: usize,
        max_genus: usize,
        edge: Vec<usize>,
    },

    #[error("deadline exceeded after {elapsed:?}")]
    DeadlineExceeded { elapsed: Duration },
}

impl RibbonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>, edge: &[usize]) -> Self {
        Self::Inconsistent {
            reason: reason.into(),
            edge: edge.to_vec(),
        }
    }

    /// True for the variants that signal a defect rather than a user error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Inconsistent { .. } | Self::GenusOutOfRange { .. }
        )
    }
}
