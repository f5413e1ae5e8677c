//! Property tests for input normalization.

use proptest::prelude::*;
use serde_json::{json, Value};

use treepick::domain::services::is_consistent;
use treepick::{Store, TreeConfig};

fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "(?s).{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map(
                prop_oneof![
                    Just("name".to_string()),
                    Just("dirs".to_string()),
                    Just("files".to_string()),
                    Just("path".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..5
            )
            .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any JSON value builds a store; malformed parts become defaults.
    #[test]
    fn property_normalize_never_panics(data in any_json()) {
        let store = Store::new(&data, TreeConfig::default());
        let root = store.root();

        prop_assert!(root.path().starts_with('/'));
        prop_assert!(!root.path().starts_with("//"));
        prop_assert!(root.node.open);
        prop_assert!(is_consistent(root));
    }

    /// PROPERTY: Every child path is its parent's path plus its own name,
    /// with no doubled slash where the two meet.
    #[test]
    fn property_paths_extend_parent_path(data in any_json()) {
        let store = Store::new(&data, TreeConfig::default());
        for branch in store.root().branches_depth_first() {
            let prefix = if branch.path().ends_with('/') {
                branch.path().to_string()
            } else {
                format!("{}/", branch.path())
            };
            for leaf in &branch.leafs {
                let name = leaf.name.trim_start_matches('/');
                prop_assert_eq!(&leaf.path, &format!("{prefix}{name}"));
                prop_assert!(!leaf.path[prefix.len()..].starts_with('/'));
            }
            for child in &branch.branches {
                let name = child.name().trim_start_matches('/');
                prop_assert_eq!(child.path(), format!("{prefix}{name}"));
                prop_assert!(!child.path()[prefix.len()..].starts_with('/'));
            }
        }
    }

    /// PROPERTY: Exporting and re-importing keeps the tree shape and paths.
    #[test]
    fn property_raw_export_reimports(data in crate::strategies::tree_data()) {
        let config = TreeConfig::default();
        let store = Store::new(&data, config.clone());
        let reimported = Store::new(&store.raw(), config);

        prop_assert_eq!(reimported.root(), store.root());
    }
}
