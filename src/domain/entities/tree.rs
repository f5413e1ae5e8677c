//! Canonical tree entities
//!
//! A `Branch` owns its child branches through `Arc` so a merge can rebuild
//! the root-to-target path while every other subtree stays shared with the
//! previous tree. Leaves are plain values stored inline in their branch.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::value_objects::{BranchStatus, CheckState, Level};

/// Terminal element of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub name: String,
    pub path: String,
    pub level: Level,
    pub check: CheckState,
    pub chosen: bool,
}

/// Per-branch state shown next to the branch name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchNode {
    pub name: String,
    /// Expanded in the presentation layer; the root is always open
    pub open: bool,
    /// At least one child branch or leaf is currently known
    pub can_open: bool,
    pub check: CheckState,
    pub level: Level,
    pub path: String,
    pub status: BranchStatus,
    pub chosen: bool,
    /// Token of the unfold whose fetch is still outstanding
    #[serde(skip)]
    pub(crate) pending_unfold: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub node: BranchNode,
    pub branches: Vec<Arc<Branch>>,
    pub leafs: Vec<Leaf>,
}

impl Branch {
    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn path(&self) -> &str {
        &self.node.path
    }

    pub fn level(&self) -> &Level {
        &self.node.level
    }

    pub fn check(&self) -> CheckState {
        self.node.check
    }

    pub fn has_children(&self) -> bool {
        !self.branches.is_empty() || !self.leafs.is_empty()
    }

    pub fn branch(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index).map(Arc::as_ref)
    }

    pub fn leaf(&self, index: usize) -> Option<&Leaf> {
        self.leafs.get(index)
    }

    /// True when every direct child branch and leaf is in `state`.
    /// Vacuously true for a branch without children.
    pub fn children_all(&self, state: CheckState) -> bool {
        self.branches.iter().all(|b| b.node.check == state)
            && self.leafs.iter().all(|l| l.check == state)
    }

    /// Every branch in this subtree, this one first, depth-first in child order
    pub fn branches_depth_first(&self) -> Vec<&Branch> {
        let mut out = vec![self];
        for child in &self.branches {
            out.extend(child.branches_depth_first());
        }
        out
    }

    /// Every leaf in this subtree, depth-first, leaves before sub-branches
    pub fn leafs_depth_first(&self) -> Vec<&Leaf> {
        let mut out: Vec<&Leaf> = self.leafs.iter().collect();
        for child in &self.branches {
            out.extend(child.leafs_depth_first());
        }
        out
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        self.leafs.len() + self.branches.iter().map(|b| b.leaf_count()).sum::<usize>()
    }
}
