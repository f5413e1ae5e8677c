//! Property tests for check-state propagation.

use std::collections::HashSet;

use proptest::prelude::*;

use treepick::domain::services::is_consistent;
use treepick::{CheckState, Store, TreeConfig};

use crate::strategies::{picks, resolve, tree_data};

fn apply_toggles(store: &mut Store, toggles: &[crate::strategies::Pick]) {
    for &pick in toggles {
        let (leaf, level) = resolve(store.root(), pick);
        if leaf {
            store.check_leaf(&level).unwrap();
        } else {
            store.check_node(&level).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any sequence of toggles every branch agrees with its
    /// children (all checked, all unchecked, or indeterminate).
    #[test]
    fn property_toggles_keep_tree_consistent(
        data in tree_data(),
        toggles in picks(24)
    ) {
        let mut store = Store::new(&data, TreeConfig::default());
        apply_toggles(&mut store, &toggles);
        prop_assert!(is_consistent(store.root()));
    }

    /// PROPERTY: Toggling a branch forces its new pure state onto every
    /// descendant.
    #[test]
    fn property_branch_toggle_locks_descendants(
        data in tree_data(),
        toggles in picks(12),
        target in any::<usize>()
    ) {
        let mut store = Store::new(&data, TreeConfig::default());
        apply_toggles(&mut store, &toggles);

        let levels = crate::strategies::branch_levels(store.root());
        let level = levels[target % levels.len()].clone();
        let state = store.check_node(&level).unwrap();
        prop_assert!(state.is_pure());

        let branch = store.find_current_branch(&level).unwrap();
        for sub in branch.branches_depth_first() {
            prop_assert_eq!(sub.check(), state);
        }
        for leaf in branch.leafs_depth_first() {
            prop_assert_eq!(leaf.check, state);
        }
    }

    /// PROPERTY: In an all-unchecked tree, toggling a branch twice restores
    /// the tree exactly.
    #[test]
    fn property_double_toggle_restores_unchecked_tree(
        data in tree_data(),
        target in any::<usize>()
    ) {
        let mut store = Store::new(&data, TreeConfig::default());
        let before = store.snapshot();

        let levels = crate::strategies::branch_levels(store.root());
        let level = levels[target % levels.len()].clone();
        prop_assert_eq!(store.check_node(&level).unwrap(), CheckState::Checked);
        prop_assert_eq!(store.check_node(&level).unwrap(), CheckState::Unchecked);

        prop_assert_eq!(store.root(), &*before);
    }

    /// PROPERTY: Selected paths name checked elements only, and never list
    /// anything inside an already selected branch.
    #[test]
    fn property_selected_paths_are_checked_and_disjoint(
        data in tree_data(),
        toggles in picks(24)
    ) {
        let mut store = Store::new(&data, TreeConfig::default());
        apply_toggles(&mut store, &toggles);

        let root = store.root();
        let checked: HashSet<String> = root
            .branches_depth_first()
            .iter()
            .filter(|b| b.check() == CheckState::Checked)
            .map(|b| b.path().to_string())
            .chain(
                root.leafs_depth_first()
                    .iter()
                    .filter(|l| l.check == CheckState::Checked)
                    .map(|l| l.path.clone()),
            )
            .collect();

        let selected = store.selected_paths();
        for path in &selected {
            prop_assert!(checked.contains(path), "{} is not checked", path);
            let nested = format!("{path}/");
            prop_assert!(
                !selected.iter().any(|other| other.starts_with(&nested)),
                "{} is selected together with a descendant",
                path
            );
        }
    }
}
