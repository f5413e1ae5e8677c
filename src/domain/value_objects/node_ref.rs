//! Node reference value object
//!
//! Branch children and leaves are indexed independently under their parent,
//! so a level alone is ambiguous. A `NodeRef` pairs the level with the kind.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Level;
use crate::error::TreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Branch,
    Leaf,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Branch => write!(f, "branch"),
            NodeKind::Leaf => write!(f, "leaf"),
        }
    }
}

impl FromStr for NodeKind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "branch" | "node" | "dir" => Ok(NodeKind::Branch),
            "leaf" | "file" => Ok(NodeKind::Leaf),
            other => Err(TreeError::InvalidOperation {
                input: s.to_string(),
                reason: format!("unknown node kind '{other}' (expected branch or leaf)"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "lowercase")]
pub enum NodeRef {
    Branch(Level),
    Leaf(Level),
}

impl NodeRef {
    pub fn level(&self) -> &Level {
        match self {
            NodeRef::Branch(level) | NodeRef::Leaf(level) => level,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Branch(_) => NodeKind::Branch,
            NodeRef::Leaf(_) => NodeKind::Leaf,
        }
    }

    pub fn new(kind: NodeKind, level: Level) -> Self {
        match kind {
            NodeKind::Branch => NodeRef::Branch(level),
            NodeKind::Leaf => NodeRef::Leaf(level),
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind(), self.level())
    }
}
