//! Normalizer
//!
//! Turns raw nested input into the canonical tree. Field names come from
//! `TreeConfig`, so `{"sourceDir": "root", "dirs": [...], "files": [...]}`
//! and `{"name": "root", ...}` normalize the same way.
//!
//! Malformed input is filled with defaults rather than rejected: a missing
//! or non-string name becomes `/`, missing child arrays are empty, and child
//! entries of the wrong shape are skipped.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::TreeConfig;
use crate::domain::entities::{Branch, BranchNode, Leaf};
use crate::domain::value_objects::{BranchStatus, Level};

/// Name used when the input carries none
pub const DEFAULT_NAME: &str = "/";

/// Build the canonical branch for `data` positioned at `level` / `path`.
///
/// `path` is the semantic path of this branch; an empty path is derived
/// from the branch name.
pub fn normalize(data: &Value, config: &TreeConfig, level: &Level, path: &str) -> Branch {
    let name = name_of(data, &config.node).unwrap_or(DEFAULT_NAME).to_string();
    let path = if path.trim().is_empty() {
        root_path(&name)
    } else {
        clean_path(path)
    };

    let branches: Vec<Arc<Branch>> = array_of(data, &config.branch)
        .iter()
        .filter_map(|entry| promote_branch(entry, &config.node))
        .enumerate()
        .map(|(i, entry)| {
            let child_name = name_of(&entry, &config.node).unwrap_or(DEFAULT_NAME);
            let child_path = join_path(&path, child_name);
            Arc::new(normalize(&entry, config, &level.child(i), &child_path))
        })
        .collect();

    let leafs: Vec<Leaf> = array_of(data, &config.leaf)
        .iter()
        .filter_map(Value::as_str)
        .enumerate()
        .map(|(i, leaf)| Leaf {
            name: leaf.to_string(),
            path: join_path(&path, leaf),
            level: level.child(i),
            check: config.check,
            chosen: false,
        })
        .collect();

    let can_open = !branches.is_empty() || !leafs.is_empty();

    Branch {
        node: BranchNode {
            name,
            open: level.is_root() || config.open,
            can_open,
            check: config.check,
            level: level.clone(),
            path,
            status: if can_open {
                BranchStatus::Filled
            } else {
                BranchStatus::Empty
            },
            chosen: false,
            pending_unfold: None,
        },
        branches,
        leafs,
    }
}

/// Normalize the construction input of a store.
///
/// The root path comes from a `path` field, else the name field, else `/`;
/// the root name is the last non-empty segment of that path.
pub fn normalize_root(data: &Value, config: &TreeConfig) -> Branch {
    let raw_path = data
        .get("path")
        .and_then(Value::as_str)
        .filter(|p| !p.trim().is_empty())
        .or_else(|| name_of(data, &config.node))
        .unwrap_or(DEFAULT_NAME);

    let name = raw_path
        .split('/')
        .filter(|segment| !segment.trim().is_empty())
        .next_back()
        .map(str::to_string)
        .or_else(|| name_of(data, "name").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let mut root = normalize(data, config, &Level::root(), &root_path(raw_path));
    root.node.name = name;
    root
}

/// Export a canonical branch back to the raw input shape
pub fn denormalize(branch: &Branch, config: &TreeConfig) -> Value {
    let mut map = Map::new();
    map.insert(config.node.clone(), Value::String(branch.name().to_string()));
    map.insert(
        config.branch.clone(),
        Value::Array(
            branch
                .branches
                .iter()
                .map(|b| denormalize(b, config))
                .collect(),
        ),
    );
    map.insert(
        config.leaf.clone(),
        Value::Array(
            branch
                .leafs
                .iter()
                .map(|l| Value::String(l.name.clone()))
                .collect(),
        ),
    );
    Value::Object(map)
}

/// Append a name to a path without producing `//`
///
/// Leading slashes of `name` are dropped, so a defaulted `/` name yields the
/// parent path with one trailing slash.
pub fn join_path(parent: &str, name: &str) -> String {
    let name = name.trim_start_matches('/');
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

fn name_of<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

fn array_of<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Bare strings become `{ <name_key>: string }`; objects pass through
fn promote_branch(entry: &Value, name_key: &str) -> Option<Value> {
    match entry {
        Value::String(name) => {
            let mut map = Map::new();
            map.insert(name_key.to_string(), Value::String(name.clone()));
            Some(Value::Object(map))
        }
        Value::Object(_) => Some(entry.clone()),
        _ => None,
    }
}

fn root_path(name: &str) -> String {
    if name == DEFAULT_NAME {
        DEFAULT_NAME.to_string()
    } else {
        clean_path(name)
    }
}

/// Leading whitespace and slashes collapse to a single `/`
fn clean_path(path: &str) -> String {
    let trimmed = path.trim_start().trim_start_matches('/');
    format!("/{trimmed}")
}
