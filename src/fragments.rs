use std::{collections::BTreeMap, ops::Range};

use crate::{node::NodeId, Error, Tree};

/// The roots of the fragments that survive a deletion pass, ordered by root
/// key.
///
/// Fragment key ranges are disjoint, so ordering by root key is the same as
/// ordering by key range. Registering a root twice is a no-op.
#[derive(Debug, Default)]
pub(crate) struct FragmentSet(BTreeMap<i64, NodeId>);

impl FragmentSet {
    pub(crate) fn register(&mut self, key: i64, root: NodeId) {
        self.0.insert(key, root);
    }

    #[cfg(test)]
    pub(crate) fn root_keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.keys().copied()
    }

    /// Consume the set, walking each fragment in order to produce the sorted
    /// sequence of surviving keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingFragments`] if the concatenated fragment
    /// keys are not strictly increasing.
    pub(crate) fn collect(self, tree: &Tree) -> Result<Survivors, Error> {
        let mut keys = Vec::with_capacity(tree.len());
        let mut fragments: Vec<Fragment> = Vec::with_capacity(self.0.len());

        for root in self.0.into_values() {
            debug_assert!(tree.node(root).parent().is_none());

            let start = keys.len();
            keys.extend(tree.in_order(root).map(|v| tree.key(v)));

            // A fragment always holds at least its root.
            let min = keys[start];
            let max = keys[keys.len() - 1];

            if let Some(prev) = fragments.last() {
                if prev.max >= min {
                    return Err(Error::OverlappingFragments {
                        left: prev.max,
                        right: min,
                    });
                }
            }

            fragments.push(Fragment { root, min, max });
        }

        Ok(Survivors { keys, fragments })
    }
}

/// A connected subtree that survived the deletion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub(crate) root: NodeId,

    /// The smallest and largest keys in the fragment.
    pub(crate) min: i64,
    pub(crate) max: i64,
}

/// The sorted surviving keys, and the fragments that hold them in key order.
#[derive(Debug)]
pub(crate) struct Survivors {
    pub(crate) keys: Vec<i64>,
    pub(crate) fragments: Vec<Fragment>,
}

impl Survivors {
    pub(crate) fn keys(&self) -> &[i64] {
        &self.keys
    }

    pub(crate) fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Find the fragment holding `key`.
    ///
    /// The candidate is found by binary search over the fragment ranges, and
    /// confirmed by a BST search within it.
    pub(crate) fn containing(&self, tree: &Tree, key: i64) -> Result<&Fragment, Error> {
        let idx = self.fragments.partition_point(|f| f.max < key);

        self.fragments
            .get(idx)
            .filter(|f| f.min <= key && tree.subtree_contains(f.root, key))
            .ok_or(Error::Containment { key })
    }

    /// The range of indexes into [`Survivors::keys()`] covered by `fragment`.
    pub(crate) fn span(&self, fragment: &Fragment) -> Result<Range<usize>, Error> {
        let rank = |key: i64| {
            self.keys
                .binary_search(&key)
                .map_err(|_| Error::Containment { key })
        };

        Ok(rank(fragment.min)?..rank(fragment.max)? + 1)
    }
}
