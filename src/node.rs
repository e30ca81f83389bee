use std::fmt::Display;

/// A handle to a node stored in a [`Tree`](crate::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Which child link of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child, holding smaller keys.
    Left,
    /// The right child, holding larger keys.
    Right,
}

impl Side {
    /// The other side.
    pub(crate) fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    key: i64,

    /// Non-owning back-link used for upward navigation only.
    ///
    /// A node without a parent is the root of a tree or of a detached
    /// fragment.
    pub(crate) parent: Option<NodeId>,

    /// Child node handles.
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(key: i64) -> Self {
        Self {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn key(&self) -> i64 {
        self.key
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Returns true if this node has no links in any direction.
    #[cfg(test)]
    pub(crate) fn is_isolated(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }
}
