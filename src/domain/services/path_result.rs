//! Selected-path extraction
//!
//! A fully checked branch stands for everything below it, so only its own
//! path is reported. Otherwise checked leaves are reported first, then each
//! sub-branch is examined in order.

use crate::domain::entities::Branch;

pub fn selected_paths(branch: &Branch) -> Vec<String> {
    let mut out = Vec::new();
    collect(branch, &mut out);
    out
}

fn collect(branch: &Branch, out: &mut Vec<String>) {
    if branch.check().is_checked() {
        out.push(branch.path().to_string());
        return;
    }

    out.extend(
        branch
            .leafs
            .iter()
            .filter(|leaf| leaf.check.is_checked())
            .map(|leaf| leaf.path.clone()),
    );
    for child in &branch.branches {
        collect(child, out);
    }
}
