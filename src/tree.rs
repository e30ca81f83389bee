use std::cmp::Ordering;

use tracing::debug;

use crate::{
    delete::Deletion,
    interval::Interval,
    iter::{InOrder, Keys},
    merge,
    node::{Node, NodeId, Side},
    shape::{self, Shape},
    Error,
};

/// The result of a successful [`Tree::delete_interval()`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pruned {
    /// The number of keys removed from the tree.
    pub deleted: usize,

    /// The number of disconnected fragments that survived the deletion and
    /// were spliced back together.
    pub fragments: usize,

    /// The shape of the reassembled tree.
    pub shape: Shape,
}

/// An unbalanced binary search tree over distinct `i64` keys, stored in a
/// node arena.
///
/// Nodes link to their children and (non-owning) to their parent by
/// [`NodeId`] handle.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,

    /// The number of keys reachable from `root`.
    ///
    /// Deleted nodes stay in `nodes` as isolated tombstones and are not
    /// counted.
    len: usize,
}

impl Tree {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting `keys` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a key appears more than once.
    pub fn from_keys<I>(keys: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = i64>,
    {
        let keys = keys.into_iter();
        let mut t = Self {
            nodes: Vec::with_capacity(keys.size_hint().0),
            ..Default::default()
        };

        for key in keys {
            t.insert(key)?;
        }

        Ok(t)
    }

    /// Insert `key` as a new leaf by standard BST descent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already present, leaving
    /// the tree unchanged.
    pub fn insert(&mut self, key: i64) -> Result<(), Error> {
        let mut ptr = match self.root {
            Some(v) => v,
            None => {
                self.root = Some(self.alloc(key));
                self.len += 1;
                return Ok(());
            }
        };

        loop {
            let side = match key.cmp(&self.node(ptr).key()) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Err(Error::DuplicateKey(key)),
                Ordering::Greater => Side::Right,
            };

            match self.node(ptr).child(side) {
                Some(v) => ptr = v,
                None => {
                    let child = self.alloc(key);
                    self.attach(ptr, side, child);
                    self.len += 1;
                    return Ok(());
                }
            }
        }
    }

    /// Returns true if `key` is stored in this tree.
    pub fn contains(&self, key: i64) -> bool {
        self.root
            .map(|v| self.subtree_contains(v, key))
            .unwrap_or_default()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The key stored at the root, if any.
    pub fn root_key(&self) -> Option<i64> {
        self.root.map(|v| self.node(v).key())
    }

    /// Iterate over all keys in ascending order.
    pub fn iter(&self) -> Keys<'_> {
        Keys::new(self, self.root)
    }

    /// Compute the [`Shape`] statistics of this tree.
    pub fn shape(&self) -> Shape {
        shape::measure(self, self.root)
    }

    /// Remove every key within `interval` and splice the surviving fragments
    /// back into a single tree, reusing each intact fragment as a whole.
    ///
    /// # Errors
    ///
    /// Returns an error if a structural invariant is found to be broken
    /// during the pass. The tree contents are unspecified after an error.
    pub fn delete_interval(&mut self, interval: &Interval) -> Result<Pruned, Error> {
        let (fragments, deleted) = Deletion::new(self, *interval).run()?;

        let survivors = fragments.collect(self)?;
        debug!(
            %interval,
            deleted,
            surviving = survivors.keys().len(),
            fragments = survivors.fragment_count(),
            "interval deleted"
        );

        self.root = merge::reassemble(self, &survivors)?;
        self.len -= deleted;
        debug_assert_eq!(self.len, survivors.keys().len());

        let shape = self.shape();
        debug!(
            root = ?self.root_key(),
            height = shape.height,
            penultimate_width = shape.penultimate_width,
            "fragments reassembled"
        );

        Ok(Pruned {
            deleted,
            fragments: survivors.fragment_count(),
            shape,
        })
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn key(&self, id: NodeId) -> i64 {
        self.nodes[id.0].key()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn alloc(&mut self, key: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key));
        id
    }

    /// Link the parentless `child` as the `side` child of `parent`, updating
    /// both directions.
    ///
    /// The `side` link of `parent` must be empty.
    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: NodeId) {
        debug_assert_ne!(parent, child);
        debug_assert!(self.node(child).parent().is_none());
        debug_assert!(self.node(parent).child(side).is_none());

        *self.node_mut(parent).child_mut(side) = Some(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Cut the edge between `child` and its parent (if any), updating both
    /// directions.
    ///
    /// Returns the former parent and the side `child` hung from.
    pub(crate) fn detach(&mut self, child: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.node_mut(child).parent.take()?;

        let side = if self.node(parent).left() == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.node(parent).right(), Some(child));
            Side::Right
        };

        *self.node_mut(parent).child_mut(side) = None;
        Some((parent, side))
    }

    /// Walk parent links up from `id` to the root of its fragment.
    pub(crate) fn top(&self, id: NodeId) -> NodeId {
        let mut ptr = id;
        while let Some(v) = self.node(ptr).parent() {
            ptr = v;
        }
        ptr
    }

    /// Follow `side` links down from `id` to the last node on that edge; the
    /// minimum (left) or maximum (right) of the subtree.
    pub(crate) fn extreme(&self, id: NodeId, side: Side) -> NodeId {
        let mut ptr = id;
        while let Some(v) = self.node(ptr).child(side) {
            ptr = v;
        }
        ptr
    }

    /// Search the subtree rooted at `root` for `key` by BST descent.
    pub(crate) fn subtree_contains(&self, root: NodeId, key: i64) -> bool {
        let mut ptr = Some(root);
        while let Some(v) = ptr {
            let n = self.node(v);
            ptr = match key.cmp(&n.key()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    pub(crate) fn in_order(&self, root: NodeId) -> InOrder<'_> {
        InOrder::new(self, Some(root))
    }

    #[cfg(test)]
    pub(crate) fn find(&self, key: i64) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .find(|&v| self.key(v) == key)
    }

    #[cfg(test)]
    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    #[cfg(test)]
    pub(crate) fn push_detached(&mut self, key: i64) -> NodeId {
        self.len += 1;
        self.alloc(key)
    }
}
