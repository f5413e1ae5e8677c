//! Level-addressed lookups
//!
//! Mutable lookups go through `Arc::make_mut`, so walking to a node that is
//! shared with a snapshot copies exactly the nodes on the way down.

use std::sync::Arc;

use crate::domain::entities::{Branch, Leaf};
use crate::domain::value_objects::Level;

/// Branch at `level`
pub fn find_branch<'a>(root: &'a Branch, level: &Level) -> Option<&'a Branch> {
    level
        .indices()
        .iter()
        .try_fold(root, |branch, &i| branch.branch(i))
}

/// Branch enclosing `level`; `None` for the root
pub fn find_parent<'a>(root: &'a Branch, level: &Level) -> Option<&'a Branch> {
    find_branch(root, &level.parent()?)
}

/// Leaf at `level` (the leaf index is the last segment)
pub fn find_leaf<'a>(root: &'a Branch, level: &Level) -> Option<&'a Leaf> {
    find_parent(root, level)?.leaf(level.last_index()?)
}

pub fn branch_mut<'a>(root: &'a mut Arc<Branch>, level: &Level) -> Option<&'a mut Branch> {
    let mut branch = Arc::make_mut(root);
    for &i in level.indices() {
        branch = Arc::make_mut(branch.branches.get_mut(i)?);
    }
    Some(branch)
}

pub fn leaf_mut<'a>(root: &'a mut Arc<Branch>, level: &Level) -> Option<&'a mut Leaf> {
    let index = level.last_index()?;
    branch_mut(root, &level.parent()?)?.leafs.get_mut(index)
}
