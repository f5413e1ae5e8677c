//! Design tokens for treepick output.
//!
//! All icons must be sourced from this module, in a unicode and an ascii
//! variant.

use crate::domain::value_objects::{BranchStatus, CheckState};

pub mod icons {
    // Check states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const INDETERMINATE: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const LOADING: &str = "⟳";
    pub const CHOSEN: &str = "←";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const INDETERMINATE: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const LOADING: &str = "[~]";
    pub const CHOSEN: &str = "<";
}

pub fn check_icon(check: CheckState, unicode: bool) -> &'static str {
    match (check, unicode) {
        (CheckState::Checked, true) => icons::CHECKED,
        (CheckState::Checked, false) => icons_ascii::CHECKED,
        (CheckState::Unchecked, true) => icons::UNCHECKED,
        (CheckState::Unchecked, false) => icons_ascii::UNCHECKED,
        (CheckState::Indeterminate, true) => icons::INDETERMINATE,
        (CheckState::Indeterminate, false) => icons_ascii::INDETERMINATE,
    }
}

/// Expansion marker of a branch; a loading branch shows the loading icon
pub fn branch_icon(open: bool, status: BranchStatus, unicode: bool) -> &'static str {
    match (status.is_loading(), open, unicode) {
        (true, _, true) => icons::LOADING,
        (true, _, false) => icons_ascii::LOADING,
        (false, true, true) => icons::EXPAND,
        (false, true, false) => icons_ascii::EXPAND,
        (false, false, true) => icons::COLLAPSE,
        (false, false, false) => icons_ascii::COLLAPSE,
    }
}

pub fn chosen_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::CHOSEN
    } else {
        icons_ascii::CHOSEN
    }
}
