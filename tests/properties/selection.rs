//! Property tests for the chosen element.

use proptest::prelude::*;

use treepick::{Action, NodeRef, Store, TreeConfig};

use crate::strategies::{picks, resolve, tree_data};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: At most one element is chosen, and it is the one chosen last.
    #[test]
    fn property_single_chosen(
        data in tree_data(),
        chooses in picks(16)
    ) {
        let mut store = Store::new(&data, TreeConfig::default());
        let mut last = None;

        for pick in chooses {
            let (leaf, level) = resolve(store.root(), pick);
            let target = if leaf { NodeRef::Leaf(level) } else { NodeRef::Branch(level) };
            store.commit(Action::Choose(target.clone())).unwrap();
            last = Some(target);
        }

        let root = store.root();
        let flagged = root.branches_depth_first().iter().filter(|b| b.node.chosen).count()
            + root.leafs_depth_first().iter().filter(|l| l.chosen).count();

        prop_assert_eq!(flagged, usize::from(last.is_some()));
        prop_assert_eq!(store.chosen(), last.as_ref());
    }
}
