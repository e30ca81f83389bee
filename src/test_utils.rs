use proptest::prelude::*;

use crate::{Interval, Tree};

const KEY_MAX: i64 = 50;
const N_KEYS: usize = 60;

/// Generate distinct keys in [-[`KEY_MAX`], [`KEY_MAX`]) in a random
/// insertion order.
pub(crate) fn arbitrary_keys() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-KEY_MAX..KEY_MAX, 0..N_KEYS)
        .prop_map(|v| v.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Generate valid intervals with bounds spilling slightly past the key domain
/// on both sides.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval> {
    let bound = -KEY_MAX - 5..KEY_MAX + 5;
    (bound.clone(), bound).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)).unwrap())
}

/// Assert the BST property and link consistency of every node reachable from
/// the root of `t`.
pub(crate) fn validate_tree_structure(t: &Tree) {
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    // Invariant 1: the root has no parent.
    assert!(t.node(root).parent().is_none());

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let n = t.node(id);
        n_nodes += 1;

        for child in n.left().iter().chain(n.right().iter()) {
            // Invariant 2: child back-links point at the parent that owns
            // them.
            assert_eq!(
                t.node(*child).parent(),
                Some(id),
                "node {} has a stale parent link",
                t.key(*child)
            );
            stack.push(*child);
        }

        // Invariant 3: the left child always contains a key strictly less
        // than this node.
        assert!(n.left().map(|v| t.key(v) < n.key()).unwrap_or(true));

        // Invariant 4: the right child always contains a key strictly greater
        // than this node.
        assert!(n.right().map(|v| t.key(v) > n.key()).unwrap_or(true));
    }

    // Invariant 5: an in-order walk is strictly increasing, extending the
    // local ordering checks above to whole subtrees.
    let keys = t.iter().collect::<Vec<_>>();
    assert!(
        keys.windows(2).all(|w| w[0] < w[1]),
        "in-order keys not sorted: {keys:?}"
    );

    // Invariant 6: the tracked size matches the reachable node count.
    assert_eq!(n_nodes, t.len());
    assert_eq!(keys.len(), t.len());
}
