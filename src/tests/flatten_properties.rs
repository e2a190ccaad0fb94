//! Property-based tests for the flatten projection and the incremental
//! toggle discipline.
//!
//! The key property: for ANY forest and ANY sequence of toggles, the
//! incrementally patched flat view equals a fresh `flatten` of the tree.
//! The full rebuild is the ground truth; the patches must never drift.

use crate::model::{NodeSpec, Tree};
use crate::view_state::{flatten, FlatView, RowIndex};
use proptest::prelude::*;

// ===== Arbitrary strategies =====

/// Strategy for a node spec: leaves at the bottom, up to 3 levels of
/// branches above them, with random initial expansion flags.
fn arb_node_spec() -> impl Strategy<Value = NodeSpec> {
    let leaf = "[a-z]{1,8}".prop_map(NodeSpec::leaf);
    leaf.prop_recursive(3, 24, 4, |inner| {
        ("[a-z]{1,8}", any::<bool>(), prop::collection::vec(inner, 1..4)).prop_map(
            |(title, expanded, children)| NodeSpec {
                title,
                expanded,
                children,
            },
        )
    })
}

/// Strategy for a non-empty forest of up to four roots.
fn arb_forest() -> impl Strategy<Value = Vec<NodeSpec>> {
    prop::collection::vec(arb_node_spec(), 1..5)
}

/// Raw row picks; reduced modulo the current view length when applied.
fn arb_toggle_rows() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..128, 0..24)
}

// ===== Properties =====

proptest! {
    #[test]
    fn flatten_matches_independent_spec_walk(specs in arb_forest()) {
        // Walk the specs directly (emit a title, descend only through
        // expanded branches) as an independent model of the projection.
        fn walk(specs: &[NodeSpec], out: &mut Vec<String>) {
            for spec in specs {
                out.push(spec.title.clone());
                if spec.expanded && !spec.children.is_empty() {
                    walk(&spec.children, out);
                }
            }
        }
        let mut expected = Vec::new();
        walk(&specs, &mut expected);

        let tree = Tree::from_specs(&specs);
        let actual: Vec<String> = flatten(&tree)
            .into_iter()
            .map(|id| tree.title(id).to_string())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn flatten_is_idempotent(specs in arb_forest()) {
        let tree = Tree::from_specs(&specs);
        prop_assert_eq!(flatten(&tree), flatten(&tree));
    }

    #[test]
    fn incremental_toggles_always_match_full_flatten(
        specs in arb_forest(),
        rows in arb_toggle_rows(),
    ) {
        let mut tree = Tree::from_specs(&specs);
        let mut view = FlatView::new(&tree);
        let expected = flatten(&tree);
        prop_assert_eq!(view.rows(), expected.as_slice());

        for raw in rows {
            let row = RowIndex::new(raw % view.len().max(1));
            let _ = view.toggle_at(&mut tree, row);
            let expected = flatten(&tree);
            prop_assert_eq!(
                view.rows(),
                expected.as_slice(),
                "patched view diverged after toggling row {}",
                row.get()
            );
        }
    }

    #[test]
    fn toggle_twice_restores_view_and_flags(
        specs in arb_forest(),
        rows in arb_toggle_rows(),
    ) {
        let mut tree = Tree::from_specs(&specs);
        let mut view = FlatView::new(&tree);

        for raw in rows {
            let row = RowIndex::new(raw % view.len().max(1));
            let before_rows = view.rows().to_vec();
            let before_flags: Vec<bool> = view
                .rows()
                .iter()
                .map(|&id| tree.is_expanded(id))
                .collect();

            if view.toggle_at(&mut tree, row).is_some() {
                view.toggle_at(&mut tree, row)
                    .expect("second toggle of the same branch must succeed");
                prop_assert_eq!(view.rows(), before_rows.as_slice());
                let after_flags: Vec<bool> = view
                    .rows()
                    .iter()
                    .map(|&id| tree.is_expanded(id))
                    .collect();
                prop_assert_eq!(after_flags, before_flags);
            }
        }
    }

    #[test]
    fn failed_toggles_have_no_observable_effect(
        specs in arb_forest(),
        raw in 0usize..256,
    ) {
        let mut tree = Tree::from_specs(&specs);
        let mut view = FlatView::new(&tree);
        let before = view.rows().to_vec();

        // Out of range is always a no-op.
        let out_of_range = RowIndex::new(view.len() + raw);
        prop_assert_eq!(view.toggle_at(&mut tree, out_of_range), None);
        prop_assert_eq!(view.rows(), before.as_slice());

        // A leaf row, if any is visible, is a no-op too.
        if let Some(leaf_row) = view
            .rows()
            .iter()
            .position(|&id| !tree.has_children(id))
        {
            prop_assert_eq!(view.toggle_at(&mut tree, RowIndex::new(leaf_row)), None);
            prop_assert_eq!(view.rows(), before.as_slice());
        }
    }
}
