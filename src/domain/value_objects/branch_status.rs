//! Branch Status Value Object
//!
//! Where a branch stands in the lazy-load lifecycle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BranchStatus {
    /// No children known (never fetched, or a fetch came back empty)
    #[default]
    Empty,
    /// Children were present in the construction input
    Filled,
    /// A fetch for the children is in flight
    Loading,
    /// Children were merged in from a fetch
    Done,
}

impl BranchStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, BranchStatus::Loading)
    }

    pub fn is_done(self) -> bool {
        matches!(self, BranchStatus::Done)
    }
}

impl std::fmt::Display for BranchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchStatus::Empty => write!(f, "empty"),
            BranchStatus::Filled => write!(f, "filled"),
            BranchStatus::Loading => write!(f, "loading"),
            BranchStatus::Done => write!(f, "done"),
        }
    }
}
