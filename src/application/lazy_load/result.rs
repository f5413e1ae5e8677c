//! Lazy-load result types

use serde::Serialize;

use crate::domain::value_objects::{BranchStatus, Level};
use crate::error::UnfoldRejection;
use crate::store::UnfoldCompletion;

/// State of one branch after an unfold went through the loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfoldReport {
    pub level: Level,
    pub path: String,
    pub open: bool,
    pub status: BranchStatus,
    /// Set when a fetch ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched: Option<UnfoldCompletion>,
    /// Set when the store refused to fetch (the branch was only toggled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<UnfoldRejection>,
}

impl UnfoldReport {
    /// True when new children were merged into the tree
    pub fn merged(&self) -> bool {
        self.fetched == Some(UnfoldCompletion::Merged)
    }
}
