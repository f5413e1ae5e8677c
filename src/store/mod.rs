//! Tree store
//!
//! Owns the canonical tree and is the single mutation surface for it:
//! check toggles, open/close with lazy loading, and choosing.
//!
//! The tree is held as `Arc<Branch>`. In-place mutations go through
//! `Arc::make_mut`, so a `snapshot` taken before a mutation keeps seeing the
//! old tree while only the touched nodes are copied.

mod commit;
mod merge;
mod selection;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::TreeConfig;
use crate::domain::entities::{Branch, Leaf};
use crate::domain::services::lookup::{self, branch_mut, leaf_mut};
use crate::domain::services::{
    check_ascendants, check_descendants, denormalize, normalize_root, selected_paths,
};
use crate::domain::value_objects::{BranchStatus, CheckState, Level, NodeKind, NodeRef};
use crate::error::{TreeError, TreeResult, UnfoldRejection};

pub use commit::{
    Action, ChosenResult, CommitOutcome, SelectionResult, UnfoldCompletion, UnfoldTicket,
};
pub use selection::Selection;

#[derive(Debug, Clone)]
pub struct Store {
    root: Arc<Branch>,
    config: TreeConfig,
    selection: Selection,
    next_unfold_token: u64,
}

impl Store {
    /// Normalize `data` with `config` and take ownership of the result
    pub fn new(data: &Value, config: TreeConfig) -> Self {
        let root = normalize_root(data, &config);
        debug!(
            root = %root.path(),
            branches = root.branches_depth_first().len(),
            leaves = root.leaf_count(),
            "store constructed"
        );
        Self {
            root: Arc::new(root),
            config,
            selection: Selection::default(),
            next_unfold_token: 1,
        }
    }

    pub fn root(&self) -> &Branch {
        &self.root
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Identifier echoed back in commit results
    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    /// The currently chosen element, if any
    pub fn chosen(&self) -> Option<&NodeRef> {
        self.selection.current()
    }

    /// Current tree; shares structure with the store until the next mutation
    pub fn snapshot(&self) -> Arc<Branch> {
        Arc::clone(&self.root)
    }

    /// Reinstate a tree previously returned by `snapshot`
    pub fn restore(&mut self, snapshot: Arc<Branch>) {
        self.selection = Selection::rescan(&snapshot);
        self.root = snapshot;
    }

    /// Export the tree in the raw input shape
    pub fn raw(&self) -> Value {
        denormalize(&self.root, &self.config)
    }

    /// Branch that contains `level`; `None` for the root
    pub fn find_parent_branch(&self, level: &Level) -> Option<&Branch> {
        lookup::find_parent(&self.root, level)
    }

    pub fn find_current_branch(&self, level: &Level) -> Option<&Branch> {
        lookup::find_branch(&self.root, level)
    }

    pub fn find_leaf(&self, level: &Level) -> Option<&Leaf> {
        lookup::find_leaf(&self.root, level)
    }

    /// Set `check` on the branch at `level`; pure states reach every descendant
    pub fn check_branch_descendants(&mut self, level: &Level, check: CheckState) -> TreeResult<()> {
        let branch = branch_mut(&mut self.root, level).ok_or_else(|| unknown_branch(level))?;
        check_descendants(branch, check);
        Ok(())
    }

    /// Recompute the branch at `level` and each of its ancestors after a
    /// child moved to `check`
    pub fn check_branch_ascendants(&mut self, level: &Level, check: CheckState) -> TreeResult<()> {
        if self.find_current_branch(level).is_none() {
            return Err(unknown_branch(level));
        }
        check_ascendants(&mut self.root, Some(level.clone()), check);
        Ok(())
    }

    /// Toggle a branch: below checked becomes checked, checked becomes unchecked
    pub fn check_node(&mut self, level: &Level) -> TreeResult<CheckState> {
        let current = self
            .find_current_branch(level)
            .ok_or_else(|| unknown_branch(level))?
            .check();
        let next = current.toggled();

        self.check_branch_descendants(level, next)?;
        check_ascendants(&mut self.root, level.parent(), next);
        Ok(next)
    }

    /// Flip a leaf, then recompute its branch and the ancestors above it
    pub fn check_leaf(&mut self, level: &Level) -> TreeResult<CheckState> {
        let leaf = leaf_mut(&mut self.root, level).ok_or_else(|| TreeError::UnknownLeaf {
            level: level.clone(),
        })?;
        let next = leaf.check.toggled();
        leaf.check = next;

        check_ascendants(&mut self.root, level.parent(), next);
        Ok(next)
    }

    /// Paths of fully checked branches and checked leaves, whole tree
    pub fn selected_paths(&self) -> Vec<String> {
        selected_paths(&self.root)
    }

    /// Paths of fully checked branches and checked leaves under `level`
    pub fn selected_paths_under(&self, level: &Level) -> TreeResult<Vec<String>> {
        self.find_current_branch(level)
            .map(selected_paths)
            .ok_or_else(|| unknown_branch(level))
    }

    /// Single entry point for user intents
    pub fn commit(&mut self, action: Action) -> TreeResult<CommitOutcome> {
        debug!(action = action.name(), target = %action.target(), "commit");

        match action {
            Action::Change(NodeRef::Branch(level)) => {
                self.check_node(&level)?;
                Ok(CommitOutcome::Change(self.selection_result()))
            }
            Action::Change(NodeRef::Leaf(level)) => {
                self.check_leaf(&level)?;
                Ok(CommitOutcome::Change(self.selection_result()))
            }
            Action::Unfold(NodeRef::Branch(level)) => self.unfold(&level).map(CommitOutcome::Unfold),
            Action::Unfold(NodeRef::Leaf(level)) => Err(TreeError::NotApplicable {
                action: "unfold",
                kind: NodeKind::Leaf,
                level,
            }),
            Action::Choose(target) => {
                let path = self.selection.choose(&mut self.root, target)?;
                Ok(CommitOutcome::Choose(ChosenResult {
                    path,
                    id: self.config.id.clone(),
                }))
            }
        }
    }

    fn selection_result(&self) -> SelectionResult {
        SelectionResult {
            path: self.selected_paths(),
            id: self.config.id.clone(),
        }
    }

    fn unfold(&mut self, level: &Level) -> TreeResult<UnfoldTicket> {
        let token = self.next_unfold_token;
        let branch = branch_mut(&mut self.root, level).ok_or_else(|| unknown_branch(level))?;
        // The root stays open; unfolding it can only fetch.
        if !level.is_root() {
            branch.node.open = !branch.node.open;
        }

        if branch.node.status.is_loading() {
            // Closing mid-fetch cancels it; the outstanding ticket goes stale.
            branch.node.pending_unfold = None;
            branch.node.status = BranchStatus::Empty;
            return Err(TreeError::UnfoldRejected {
                level: level.clone(),
                reason: UnfoldRejection::InFlight,
            });
        }

        if branch.node.can_open || branch.node.status.is_done() {
            return Err(TreeError::UnfoldRejected {
                level: level.clone(),
                reason: UnfoldRejection::AlreadyResolved,
            });
        }

        branch.node.status = BranchStatus::Loading;
        branch.node.pending_unfold = Some(token);
        let ticket = UnfoldTicket {
            level: level.clone(),
            path: branch.path().to_string(),
            name: branch.name().to_string(),
            token,
        };
        self.next_unfold_token += 1;
        Ok(ticket)
    }
}

fn unknown_branch(level: &Level) -> TreeError {
    TreeError::UnknownBranch {
        level: level.clone(),
    }
}
