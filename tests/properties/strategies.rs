//! Shared generators: tree shapes with positional names, and operations
//! that pick their target by index into the live tree.

use proptest::prelude::*;
use serde_json::{json, Value};

use treepick::{Branch, Level};

/// Tree structure without names; names are assigned by position so that
/// every semantic path is unique.
#[derive(Debug, Clone)]
pub struct Shape {
    pub dirs: Vec<Shape>,
    pub files: usize,
}

impl Shape {
    pub fn to_json(&self, name: &str) -> Value {
        let dirs: Vec<Value> = self
            .dirs
            .iter()
            .enumerate()
            .map(|(i, dir)| dir.to_json(&format!("d{i}")))
            .collect();
        let files: Vec<Value> = (0..self.files).map(|i| json!(format!("f{i}"))).collect();
        json!({ "name": name, "dirs": dirs, "files": files })
    }
}

pub fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (0usize..4).prop_map(|files| Shape {
        dirs: Vec::new(),
        files,
    });
    leaf.prop_recursive(4, 40, 4, |inner| {
        (proptest::collection::vec(inner, 0..4), 0usize..4)
            .prop_map(|(dirs, files)| Shape { dirs, files })
    })
}

/// Root document for a generated shape
pub fn tree_data() -> impl Strategy<Value = Value> {
    shape().prop_map(|shape| shape.to_json("root"))
}

/// An operation target: branch or leaf, chosen by index modulo the count
#[derive(Debug, Clone, Copy)]
pub struct Pick {
    pub leaf: bool,
    pub index: usize,
}

pub fn pick() -> impl Strategy<Value = Pick> {
    (any::<bool>(), any::<usize>()).prop_map(|(leaf, index)| Pick { leaf, index })
}

pub fn picks(max: usize) -> impl Strategy<Value = Vec<Pick>> {
    proptest::collection::vec(pick(), 0..max)
}

pub fn branch_levels(root: &Branch) -> Vec<Level> {
    root.branches_depth_first()
        .iter()
        .map(|b| b.level().clone())
        .collect()
}

pub fn leaf_levels(root: &Branch) -> Vec<Level> {
    root.leafs_depth_first()
        .iter()
        .map(|l| l.level.clone())
        .collect()
}

/// Resolve a pick against the live tree; leaf picks fall back to branches
/// when the tree has no leaves
pub fn resolve(root: &Branch, pick: Pick) -> (bool, Level) {
    let leaves = leaf_levels(root);
    if pick.leaf && !leaves.is_empty() {
        return (true, leaves[pick.index % leaves.len()].clone());
    }
    let branches = branch_levels(root);
    (false, branches[pick.index % branches.len()].clone())
}
