//! Check State Value Object
//!
//! Tri-state selection marker carried by every branch node and leaf.
//! Serialized as the integer `-1`, `0` or `1`.

use serde::{Deserialize, Serialize};

/// Selection state of a branch or leaf
///
/// - `Unchecked` (-1): nothing under it is selected
/// - `Indeterminate` (0): mixed children; leaves never hold it after a toggle
/// - `Checked` (1): everything under it is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "i8", into = "i8")]
pub enum CheckState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    pub fn as_i8(self) -> i8 {
        match self {
            CheckState::Unchecked => -1,
            CheckState::Indeterminate => 0,
            CheckState::Checked => 1,
        }
    }

    /// Pure states (-1 and 1) force themselves onto descendants; 0 never does.
    pub fn is_pure(self) -> bool {
        !matches!(self, CheckState::Indeterminate)
    }

    pub fn is_checked(self) -> bool {
        matches!(self, CheckState::Checked)
    }

    /// State a direct user toggle moves to: anything below checked becomes
    /// checked, checked becomes unchecked.
    pub fn toggled(self) -> Self {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::Indeterminate => CheckState::Checked,
        }
    }
}

impl From<CheckState> for i8 {
    fn from(state: CheckState) -> Self {
        state.as_i8()
    }
}

impl TryFrom<i8> for CheckState {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(CheckState::Unchecked),
            0 => Ok(CheckState::Indeterminate),
            1 => Ok(CheckState::Checked),
            other => Err(format!("check state must be -1, 0 or 1, got {other}")),
        }
    }
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckState::Unchecked => write!(f, "unchecked"),
            CheckState::Indeterminate => write!(f, "indeterminate"),
            CheckState::Checked => write!(f, "checked"),
        }
    }
}
