//! Property-based tests for index set eligibility
//!
//! Invariants that hold for ALL node type lists and ancestries:
//! - Exclude wins: an excluded alias is never indexed
//! - Allow-list: with includes, only included (and not excluded) aliases pass
//! - Open: without includes, everything not excluded passes
//! - Scope: containment is exactly `node == root || root in ancestry`

use indexset_config::*;
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use std::collections::HashSet;

fn alias() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z]{0,7}"
}

fn descriptor(include: &HashSet<String>, exclude: &HashSet<String>) -> IndexSetDescriptor {
    IndexSetDescriptor::builder("Prop", "indexes/prop")
        .include_node_types(include.iter().cloned())
        .exclude_node_types(exclude.iter().cloned())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_exclude_always_wins(
        include in hash_set(alias(), 0..6),
        exclude in hash_set(alias(), 1..6),
    ) {
        // Include everything excluded as well, so the two lists overlap
        let include: HashSet<String> = include.union(&exclude).cloned().collect();
        let d = descriptor(&include, &exclude);

        for a in &exclude {
            prop_assert!(!d.should_index_node_type(a));
        }
    }

    #[test]
    fn prop_include_is_allow_list(
        include in hash_set(alias(), 0..6),
        exclude in hash_set(alias(), 0..6),
        candidate in alias(),
    ) {
        let d = descriptor(&include, &exclude);
        prop_assume!(!exclude.contains(&candidate));

        let expected = include.is_empty() || include.contains(&candidate);
        prop_assert_eq!(d.should_index_node_type(&candidate), expected);
    }

    #[test]
    fn prop_unscoped_accepts_everything(
        node in any::<i32>(),
        ancestry in vec(any::<i32>(), 0..8),
    ) {
        let d = descriptor(&HashSet::new(), &HashSet::new());
        prop_assert!(d.is_within_scope(node, &ancestry));
    }

    #[test]
    fn prop_scope_containment(
        root in -3i32..10,
        node in -3i32..10,
        ancestry in vec(-3i32..10, 0..6),
    ) {
        let d = IndexSetDescriptor::builder("Scoped", "indexes/scoped")
            .scope_root_id(root)
            .build()
            .unwrap();

        let expected = node == root || ancestry.contains(&root);
        prop_assert_eq!(d.is_within_scope(node, &ancestry), expected);
    }

    #[test]
    fn prop_configured_attribute_fields_unchanged(
        names in vec("[a-zA-Z]{1,10}", 1..8),
    ) {
        let unique: Vec<String> = names
            .into_iter()
            .fold(Vec::new(), |mut acc, name| {
                if !acc.contains(&name) {
                    acc.push(name);
                }
                acc
            });
        let d = IndexSetDescriptor::builder("Fields", "indexes/fields")
            .attribute_fields(unique.clone())
            .build()
            .unwrap();

        let resolved: Vec<&str> = d.resolved_attribute_fields().names().collect();
        prop_assert_eq!(resolved, unique.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
