//! Level Value Object
//!
//! Positional address of a branch or leaf: the dotted sequence of sibling
//! indices from the root. The root is always `"0"`; the child at index `i`
//! of a branch at `L` lives at `L.i`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level {
    indices: Vec<usize>,
}

impl Level {
    pub fn root() -> Self {
        Self::default()
    }

    /// Sibling indices below the root, outermost first
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// Level of the enclosing branch; `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, head) = self.indices.split_last()?;
        Some(Self {
            indices: head.to_vec(),
        })
    }

    /// Index within the parent; `None` for the root
    pub fn last_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// True when `other` is strictly below `self`
    pub fn is_ancestor_of(&self, other: &Level) -> bool {
        other.indices.len() > self.indices.len() && other.indices.starts_with(&self.indices)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0")?;
        for index in &self.indices {
            write!(f, ".{index}")?;
        }
        Ok(())
    }
}

impl FromStr for Level {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TreeError::InvalidLevel {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = s.trim().split('.');
        match segments.next() {
            Some("0") => {}
            Some("") | None => return Err(invalid("level is empty")),
            Some(_) => return Err(invalid("level must start at root '0'")),
        }

        let indices = segments
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| invalid(&format!("'{segment}' is not a sibling index")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { indices })
    }
}

impl TryFrom<String> for Level {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}
