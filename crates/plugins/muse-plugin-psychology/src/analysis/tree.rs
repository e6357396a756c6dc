//! Tree algorithms over the motivation arena

use crate::types::{MotivationNode, MotivationTree, NodeIndex};

/// Longest root-to-leaf path in the tree
///
/// A root has depth 1 and each step into its children adds 1. An empty tree
/// has depth 0.
pub fn calculate_tree_depth(tree: &MotivationTree) -> usize {
    tree.root_indices()
        .iter()
        .map(|root| subtree_depth(tree, *root))
        .max()
        .unwrap_or(0)
}

/// Depth of the subtree rooted at `index`, counting that node as 1
pub fn subtree_depth(tree: &MotivationTree, index: NodeIndex) -> usize {
    match tree.get(index) {
        Some(node) => {
            1 + node
                .children()
                .iter()
                .map(|child| subtree_depth(tree, *child))
                .max()
                .unwrap_or(0)
        }
        None => 0,
    }
}

/// All motivations in pre-order: each node before its children, children in
/// order, roots in order
pub fn flatten_motivation_tree(tree: &MotivationTree) -> Vec<&MotivationNode> {
    let mut out = Vec::with_capacity(tree.len());
    let mut stack: Vec<NodeIndex> = tree.root_indices().iter().rev().copied().collect();

    while let Some(idx) = stack.pop() {
        if let Some(node) = tree.get(idx) {
            out.push(node);
            stack.extend(node.children().iter().rev().copied());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Motivation, MotivationLevel};
    use std::collections::HashSet;

    fn leaf(id: &str) -> Motivation {
        Motivation::new(id.to_uppercase(), MotivationLevel::Secondary, 50.0).with_id(id)
    }

    fn branching_tree() -> MotivationTree {
        // a
        // ├─ b
        // │  └─ d
        // └─ c
        // e
        let a = leaf("a")
            .with_child(leaf("b").with_child(leaf("d")))
            .with_child(leaf("c"));
        MotivationTree::from_roots("c1", vec![a, leaf("e")], MotivationLevel::Primary)
    }

    #[test]
    fn test_empty_tree_depth_is_zero() {
        let tree = MotivationTree::new("c1");
        assert_eq!(calculate_tree_depth(&tree), 0);
        assert!(flatten_motivation_tree(&tree).is_empty());
    }

    #[test]
    fn test_single_root_depth_is_one() {
        let tree = MotivationTree::from_roots("c1", vec![leaf("a")], MotivationLevel::Primary);
        assert_eq!(calculate_tree_depth(&tree), 1);
    }

    #[test]
    fn test_depth_is_one_plus_deepest_child() {
        let tree = branching_tree();
        assert_eq!(calculate_tree_depth(&tree), 3);

        for root in tree.root_indices() {
            let node = tree.get(*root).unwrap();
            let deepest_child = node
                .children()
                .iter()
                .map(|c| subtree_depth(&tree, *c))
                .max()
                .unwrap_or(0);
            assert_eq!(subtree_depth(&tree, *root), 1 + deepest_child);
        }
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let tree = branching_tree();
        let ids: Vec<&str> = flatten_motivation_tree(&tree)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn test_flatten_visits_every_node_once() {
        let tree = branching_tree();
        let flat = flatten_motivation_tree(&tree);
        assert_eq!(flat.len(), tree.total_motivations());

        let unique: HashSet<&str> = flat.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(unique.len(), flat.len());
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let tree = branching_tree();
        let first: Vec<String> = flatten_motivation_tree(&tree).iter().map(|n| n.id.clone()).collect();
        let second: Vec<String> = flatten_motivation_tree(&tree).iter().map(|n| n.id.clone()).collect();
        assert_eq!(first, second);
    }
}
