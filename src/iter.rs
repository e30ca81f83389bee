use crate::{node::NodeId, Tree};

/// An in-order iterator over the nodes of the subtree rooted at a given
/// [`NodeId`], yielding node handles in ascending key order.
#[derive(Debug)]
pub(crate) struct InOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(tree: &'a Tree, root: Option<NodeId>) -> Self {
        let mut this = Self {
            tree,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: NodeId) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.tree.node(v).left();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = self.tree.node(v).right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order.
///
/// Constructed by [`Tree::iter()`].
#[derive(Debug)]
pub struct Keys<'a>(InOrder<'a>);

impl<'a> Keys<'a> {
    pub(crate) fn new(tree: &'a Tree, root: Option<NodeId>) -> Self {
        Self(InOrder::new(tree, root))
    }
}

impl Iterator for Keys<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.0.next()?;
        Some(self.0.tree.node(id).key())
    }
}
