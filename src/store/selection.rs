//! Chosen-element tracking
//!
//! At most one branch or leaf in a tree carries `chosen = true`. Choosing a
//! new element clears the previous one before the new flag is set, inside a
//! single call, so no caller ever observes two chosen elements.

use std::sync::Arc;

use crate::domain::entities::Branch;
use crate::domain::services::lookup::{branch_mut, find_branch, find_leaf, leaf_mut};
use crate::domain::value_objects::{Level, NodeRef};
use crate::error::{TreeError, TreeResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    last_chosen: Option<NodeRef>,
}

impl Selection {
    pub fn current(&self) -> Option<&NodeRef> {
        self.last_chosen.as_ref()
    }

    /// Mark `target` chosen, clearing the previous element. Returns the
    /// semantic path of the new chosen element.
    pub fn choose(&mut self, root: &mut Arc<Branch>, target: NodeRef) -> TreeResult<String> {
        let path = path_of(root, &target)?;

        if let Some(previous) = self.last_chosen.take() {
            // The previous element may have been replaced by a merge.
            if let Some(flag) = chosen_flag_mut(root, &previous) {
                *flag = false;
            }
        }

        if let Some(flag) = chosen_flag_mut(root, &target) {
            *flag = true;
        }
        self.last_chosen = Some(target);
        Ok(path)
    }

    /// Drop the record when the chosen element lies strictly inside the
    /// subtree at `level`, which a merge is about to replace.
    pub fn forget_within(&mut self, level: &Level) {
        let inside = match &self.last_chosen {
            Some(NodeRef::Branch(chosen)) => level.is_ancestor_of(chosen),
            Some(NodeRef::Leaf(chosen)) => chosen
                .parent()
                .is_some_and(|parent| parent == *level || level.is_ancestor_of(&parent)),
            None => false,
        };
        if inside {
            self.last_chosen = None;
        }
    }

    /// Rebuild the record from the `chosen` flags of a tree
    pub fn rescan(root: &Branch) -> Self {
        let last_chosen = root
            .branches_depth_first()
            .into_iter()
            .find_map(|branch| {
                if branch.node.chosen {
                    return Some(NodeRef::Branch(branch.level().clone()));
                }
                branch
                    .leafs
                    .iter()
                    .find(|leaf| leaf.chosen)
                    .map(|leaf| NodeRef::Leaf(leaf.level.clone()))
            });
        Self { last_chosen }
    }
}

fn path_of(root: &Branch, target: &NodeRef) -> TreeResult<String> {
    match target {
        NodeRef::Branch(level) => find_branch(root, level)
            .map(|b| b.path().to_string())
            .ok_or_else(|| TreeError::UnknownBranch {
                level: level.clone(),
            }),
        NodeRef::Leaf(level) => find_leaf(root, level)
            .map(|l| l.path.clone())
            .ok_or_else(|| TreeError::UnknownLeaf {
                level: level.clone(),
            }),
    }
}

fn chosen_flag_mut<'a>(root: &'a mut Arc<Branch>, target: &NodeRef) -> Option<&'a mut bool> {
    match target {
        NodeRef::Branch(level) => branch_mut(root, level).map(|b| &mut b.node.chosen),
        NodeRef::Leaf(level) => leaf_mut(root, level).map(|l| &mut l.chosen),
    }
}
