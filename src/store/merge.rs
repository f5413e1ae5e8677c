//! Lazy-load merge
//!
//! Splices freshly fetched children into the tree. Only the nodes on the
//! root-to-target path are rebuilt; every other subtree keeps its `Arc` and
//! stays pointer-equal to the pre-merge tree.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::Branch;
use crate::domain::ports::FetchError;
use crate::domain::services::lookup::branch_mut;
use crate::domain::services::{check_ascendants, check_descendants, normalize};
use crate::domain::value_objects::{BranchStatus, CheckState, Level};
use crate::error::TreeResult;

use super::{unknown_branch, Store, UnfoldCompletion, UnfoldTicket};

impl Store {
    /// Replace the branch at `target` with `data` normalized in its place.
    ///
    /// The new branch keeps the target's name, path, check state and chosen
    /// flag, is open, and has status `done`. Its children take the target's
    /// check state when that state is pure.
    pub fn merge(&mut self, data: &Value, target: &Level) -> TreeResult<()> {
        let prior = self
            .find_current_branch(target)
            .ok_or_else(|| unknown_branch(target))?;
        let check = prior.check();
        let chosen = prior.node.chosen;
        let name = prior.name().to_string();
        let path = prior.path().to_string();

        let mut branch = normalize(data, &self.config, target, &path);
        branch.node.name = name;
        branch.node.open = true;
        branch.node.status = BranchStatus::Done;
        branch.node.chosen = chosen;
        check_descendants(&mut branch, check);

        // An indeterminate placeholder cannot dictate its new children, so
        // settle the branch from what was actually fetched.
        let settled = if check.is_pure() {
            check
        } else {
            settle(&branch)
        };
        branch.node.check = settled;

        debug!(
            level = %target,
            path = %branch.path(),
            branches = branch.branches.len(),
            leaves = branch.leafs.len(),
            "merging fetched branch"
        );

        self.selection.forget_within(target);

        match (target.parent(), target.last_index()) {
            (Some(parent_level), Some(index)) => {
                let parent = branch_mut(&mut self.root, &parent_level)
                    .ok_or_else(|| unknown_branch(&parent_level))?;
                let slot = parent
                    .branches
                    .get_mut(index)
                    .ok_or_else(|| unknown_branch(target))?;
                *slot = Arc::new(branch);
                parent.node.can_open = true;
            }
            _ => self.root = Arc::new(branch),
        }

        if settled != check {
            check_ascendants(&mut self.root, target.parent(), settled);
        }
        Ok(())
    }

    /// Hand the outcome of a fetch back to the store.
    ///
    /// A ticket that no longer matches the branch (closed while loading,
    /// unfolded again, or replaced) leaves the tree untouched. A failed or
    /// empty fetch marks the branch `empty` so a later unfold can retry.
    pub fn complete_unfold(
        &mut self,
        ticket: &UnfoldTicket,
        outcome: Result<Option<Value>, FetchError>,
    ) -> TreeResult<UnfoldCompletion> {
        let current = self
            .find_current_branch(&ticket.level)
            .filter(|b| b.node.pending_unfold == Some(ticket.token) && b.path() == ticket.path);
        if current.is_none() {
            debug!(level = %ticket.level, token = ticket.token, "ignoring stale unfold result");
            return Ok(UnfoldCompletion::Stale);
        }

        match outcome {
            Ok(Some(data)) if !data.is_null() => {
                self.merge(&data, &ticket.level)?;
                Ok(UnfoldCompletion::Merged)
            }
            Ok(_) => {
                warn!(path = %ticket.path, "fetch returned no data");
                self.mark_empty(&ticket.level)?;
                Ok(UnfoldCompletion::Empty)
            }
            Err(err) => {
                warn!(path = %ticket.path, error = %err, "fetch failed");
                self.mark_empty(&ticket.level)?;
                Ok(UnfoldCompletion::Empty)
            }
        }
    }

    fn mark_empty(&mut self, level: &Level) -> TreeResult<()> {
        let branch = branch_mut(&mut self.root, level).ok_or_else(|| unknown_branch(level))?;
        branch.node.status = BranchStatus::Empty;
        branch.node.can_open = false;
        branch.node.pending_unfold = None;
        Ok(())
    }
}

/// Own state implied by a branch's children; childless branches keep theirs
fn settle(branch: &Branch) -> CheckState {
    if !branch.has_children() {
        branch.check()
    } else if branch.children_all(CheckState::Checked) {
        CheckState::Checked
    } else if branch.children_all(CheckState::Unchecked) {
        CheckState::Unchecked
    } else {
        CheckState::Indeterminate
    }
}
