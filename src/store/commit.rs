//! Commit actions and their results
//!
//! Every mutation a presentation layer triggers goes through
//! `Store::commit` with one of these actions.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::value_objects::{Level, NodeKind, NodeRef};
use crate::error::TreeError;

/// User intent submitted to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle the check state of a branch or leaf
    Change(NodeRef),
    /// Toggle a branch open/closed, asking for a fetch when its children are unknown
    Unfold(NodeRef),
    /// Make a branch or leaf the single chosen element
    Choose(NodeRef),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Change(_) => "change",
            Action::Unfold(_) => "unfold",
            Action::Choose(_) => "choose",
        }
    }

    pub fn target(&self) -> &NodeRef {
        match self {
            Action::Change(target) | Action::Unfold(target) | Action::Choose(target) => target,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name(), self.target())
    }
}

/// `<action>:<kind>:<level>`, e.g. `change:leaf:0.1.2` or `unfold:branch:0.3`.
/// The kind defaults to `branch` when omitted (`unfold:0.3`).
impl FromStr for Action {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| TreeError::InvalidOperation {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let (action, kind, level) = match parts.as_slice() {
            [action, level] => (*action, NodeKind::Branch, *level),
            [action, kind, level] => (*action, kind.parse::<NodeKind>()?, *level),
            _ => return Err(invalid("expected <action>:<kind>:<level>".to_string())),
        };

        let level: Level = level.parse()?;
        let target = NodeRef::new(kind, level);

        match action.trim().to_lowercase().as_str() {
            "change" | "check" => Ok(Action::Change(target)),
            "unfold" | "open" => Ok(Action::Unfold(target)),
            "choose" => Ok(Action::Choose(target)),
            other => Err(invalid(format!(
                "unknown action '{other}' (expected change, unfold or choose)"
            ))),
        }
    }
}

/// Result of a `change` commit: every selected path, collapsed per fully
/// checked branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub path: Vec<String>,
    pub id: Option<String>,
}

/// Result of a `choose` commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChosenResult {
    pub path: String,
    pub id: Option<String>,
}

/// Permission to fetch the children of one branch.
///
/// Only the most recent ticket for a branch can complete; closing the
/// branch while loading, or replacing it, makes the ticket stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfoldTicket {
    pub level: Level,
    pub path: String,
    pub name: String,
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CommitOutcome {
    Change(SelectionResult),
    Unfold(UnfoldTicket),
    Choose(ChosenResult),
}

/// What happened to a fetch result handed back to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnfoldCompletion {
    /// Children merged; branch status is `done`
    Merged,
    /// Fetch failed or returned nothing; branch status is `empty`
    Empty,
    /// Ticket no longer matches the branch; tree untouched
    Stale,
}
