//! Progress counts for a plan.

use serde::{Deserialize, Serialize};

/// Completed and total item counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Progress {
    /// Number of completed items
    pub completed: usize,
    /// Total number of items
    pub total: usize,
}

impl Progress {
    /// Create a progress value.
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Completion percentage, rounded down. An empty plan reports 0.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}

impl From<Progress> for (usize, usize) {
    fn from(progress: Progress) -> Self {
        (progress.completed, progress.total)
    }
}
