//! Census configuration.
//!
//! Plain `Copy` structs with defaults; validation happens once in
//! `Census::new`, not inside the hot loop.

use std::time::Duration;

/// Problem parameters: which family of ribbon graphs to enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RibbonCfg {
    pub vertex_count: usize,
    pub valence: usize,
    /// Highest histogram bin. `None` resolves to the largest genus any
    /// connected graph of this shape can reach (see `bounds::max_connected_genus`).
    pub max_genus: Option<usize>,
}

impl RibbonCfg {
    pub fn new(vertex_count: usize, valence: usize) -> Self {
        Self {
            vertex_count,
            valence,
            max_genus: None,
        }
    }

    pub fn with_max_genus(mut self, max_genus: usize) -> Self {
        self.max_genus = Some(max_genus);
        self
    }
}

impl Default for RibbonCfg {
    /// Five tetravalent vertices, the classic hard-coded run.
    fn default() -> Self {
        Self::new(5, 4)
    }
}

/// How the top-level branches are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Execution {
    /// One depth-first traversal on the calling thread.
    #[default]
    Sequential,
    /// One rayon task per partner of arrow 0, each with private buffers.
    Parallel,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    pub execution: Execution,
    /// Wall-clock budget, checked between top-level branches only.
    pub deadline: Option<Duration>,
}
