//! Check-state propagation
//!
//! Two directions:
//! - Downward: a pure state (checked/unchecked) set on a branch is forced
//!   onto every descendant. Indeterminate never travels down.
//! - Upward: after a child changes, each ancestor is recomputed from its
//!   direct children, driven by the state that triggered the walk.

use std::sync::Arc;

use crate::domain::entities::Branch;
use crate::domain::value_objects::{CheckState, Level};

use super::lookup::branch_mut;

/// Set `check` on `branch` and, for pure states, on every descendant
pub fn check_descendants(branch: &mut Branch, check: CheckState) {
    branch.node.check = check;
    if !check.is_pure() {
        return;
    }

    for leaf in &mut branch.leafs {
        leaf.check = check;
    }
    for child in &mut branch.branches {
        check_descendants(Arc::make_mut(child), check);
    }
}

/// State of `branch` after one of its children moved to `trigger`.
///
/// - checked: checked if all children are checked, else indeterminate
/// - unchecked: unchecked if all children are unchecked, else indeterminate
/// - indeterminate: indeterminate
pub fn aggregate(branch: &Branch, trigger: CheckState) -> CheckState {
    match trigger {
        CheckState::Checked if branch.children_all(CheckState::Checked) => CheckState::Checked,
        CheckState::Unchecked if branch.children_all(CheckState::Unchecked) => {
            CheckState::Unchecked
        }
        _ => CheckState::Indeterminate,
    }
}

/// Recompute every branch from `start` up to the root.
///
/// `start` is the branch whose child just changed to `trigger`; `None`
/// (the change happened at the root) is a no-op.
pub fn check_ascendants(root: &mut Arc<Branch>, start: Option<Level>, trigger: CheckState) {
    let mut current = start;
    let mut trigger = trigger;

    while let Some(level) = current {
        let Some(branch) = branch_mut(root, &level) else {
            break;
        };
        let next = aggregate(branch, trigger);
        branch.node.check = next;

        trigger = next;
        current = level.parent();
    }
}

/// True when every branch in the subtree agrees with its children
/// (leaves and empty branches are trivially consistent).
pub fn is_consistent(branch: &Branch) -> bool {
    let own = branch.check();
    let children_ok = branch.branches.iter().all(|b| is_consistent(b));
    if !branch.has_children() {
        return children_ok;
    }

    let expected = if branch.children_all(CheckState::Checked) {
        CheckState::Checked
    } else if branch.children_all(CheckState::Unchecked) {
        CheckState::Unchecked
    } else {
        CheckState::Indeterminate
    };
    children_ok && own == expected
}
