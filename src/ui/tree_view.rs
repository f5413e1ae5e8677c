//! Indented text rendering of a tree
//!
//! ```text
//! ▼ ◐ root [0]
//!   ▶ ● subroot-1 [0.0]
//!     ○ a.js [0.0] ←
//! ```
//!
//! Branches and leaves are numbered independently, so the bracketed level
//! of a leaf is only unique together with its kind.

use crate::domain::entities::{Branch, Leaf};

use super::theme::{branch_icon, check_icon, chosen_icon, icons, icons_ascii};

#[derive(Debug, Clone, Copy)]
pub struct TreeView {
    unicode: bool,
    expand_all: bool,
}

impl TreeView {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            expand_all: false,
        }
    }

    /// Render closed branches' children as well
    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub fn render(&self, root: &Branch) -> String {
        let mut lines = Vec::new();
        self.render_branch(root, 0, &mut lines);
        lines.join("\n")
    }

    fn render_branch(&self, branch: &Branch, depth: usize, lines: &mut Vec<String>) {
        let node = &branch.node;
        lines.push(format!(
            "{}{} {} {} [{}]{}",
            "  ".repeat(depth),
            branch_icon(node.open, node.status, self.unicode),
            check_icon(node.check, self.unicode),
            node.name,
            node.level,
            self.chosen_suffix(node.chosen),
        ));

        if !(node.open || self.expand_all) {
            return;
        }
        for child in &branch.branches {
            self.render_branch(child, depth + 1, lines);
        }
        for leaf in &branch.leafs {
            lines.push(self.render_leaf(leaf, depth + 1));
        }
    }

    fn render_leaf(&self, leaf: &Leaf, depth: usize) -> String {
        let pad = if self.unicode {
            " ".repeat(icons::EXPAND.chars().count())
        } else {
            " ".repeat(icons_ascii::EXPAND.len())
        };
        format!(
            "{}{} {} {} [{}]{}",
            "  ".repeat(depth),
            pad,
            check_icon(leaf.check, self.unicode),
            leaf.name,
            leaf.level,
            self.chosen_suffix(leaf.chosen),
        )
    }

    fn chosen_suffix(&self, chosen: bool) -> String {
        if chosen {
            format!(" {}", chosen_icon(self.unicode))
        } else {
            String::new()
        }
    }
}
