//! Property tests for §8 laws 1-3: weight preservation, hash stability, and
//! skeleton-equality's reflexivity/symmetry/transitivity, over randomly
//! generated small trees.

use proptest::prelude::*;

use reagent::model::{Origin, PatternNode, TreeNode};

fn arb_tree() -> impl Strategy<Value = TreeNode> {
    let leaf = ("[A-Za-z]{1,6}", 1usize..1000).prop_map(|(value, line)| {
        TreeNode::leaf(value, Origin::new("f.py", line, 0))
    });

    leaf.prop_recursive(3, 20, 4, |inner| {
        ("[A-Za-z]{1,6}", prop::collection::vec(inner, 0..4), 1usize..1000).prop_map(
            |(value, children, line)| TreeNode::new(value, children, Origin::new("f.py", line, 0)),
        )
    })
}

fn tree_node_count(t: &TreeNode) -> usize {
    1 + t.children.iter().map(tree_node_count).sum::<usize>()
}

proptest! {
    /// §8 law 1: weight(n) = 1 + sum(weight(c) for c in children).
    #[test]
    fn prop_weight_preservation(tree in arb_tree()) {
        prop_assert_eq!(tree.weight(), tree_node_count(&tree));
        for child in &tree.children {
            prop_assert!(child.weight() < tree.weight());
        }
    }

    /// §8 law 2: building the same AST twice yields identical skeleton_hash.
    #[test]
    fn prop_hash_stability(tree in arb_tree()) {
        let json = serde_json::to_string(&tree).unwrap();
        let rebuilt: TreeNode = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(tree.skeleton_hash(), rebuilt.skeleton_hash());
        prop_assert_eq!(tree.weight(), rebuilt.weight());
    }

    /// §8 law 3: skeleton_equals is reflexive, symmetric, and transitive.
    #[test]
    fn prop_skeleton_equals_is_an_equivalence_relation(a in arb_tree(), b in arb_tree(), c in arb_tree()) {
        let pab = PatternNode::new(&a, &b, Some(a.value.clone()));
        let pbc = PatternNode::new(&b, &c, Some(b.value.clone()));
        let pac = PatternNode::new(&a, &c, Some(a.value.clone()));

        // Reflexivity
        prop_assert!(pab.skeleton_equals(&pab));

        // Symmetry
        prop_assert_eq!(pab.skeleton_equals(&pbc), pbc.skeleton_equals(&pab));

        // Transitivity, only meaningful when the premises hold.
        if pab.skeleton_equals(&pbc) && pbc.skeleton_equals(&pac) {
            prop_assert!(pab.skeleton_equals(&pac));
        }
    }
}
