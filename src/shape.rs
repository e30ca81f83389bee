use std::collections::VecDeque;

use crate::{node::NodeId, Tree};

/// Summary statistics describing the shape of a [`Tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The depth of the deepest node, where the root is at depth 0.
    ///
    /// An empty tree has a height of 0.
    pub height: usize,

    /// The number of nodes at depth `height - 1`, the level immediately
    /// above the deepest level.
    ///
    /// This is 0 when the tree has fewer than two levels.
    pub penultimate_width: usize,
}

/// Breadth-first walk the subtree rooted at `root`, counting nodes per level.
pub(crate) fn measure(tree: &Tree, root: Option<NodeId>) -> Shape {
    let root = match root {
        Some(v) => v,
        None => return Shape::default(),
    };

    // Node counts indexed by depth.
    let mut widths: Vec<usize> = vec![];

    let mut queue = VecDeque::from([(root, 0_usize)]);
    while let Some((v, depth)) = queue.pop_front() {
        // Depths are visited in non-decreasing order, one level at a time.
        if widths.len() == depth {
            widths.push(0);
        }
        widths[depth] += 1;

        let n = tree.node(v);
        queue.extend(n.left().into_iter().chain(n.right()).map(|c| (c, depth + 1)));
    }

    let height = widths.len() - 1;
    Shape {
        height,
        penultimate_width: height
            .checked_sub(1)
            .map(|d| widths[d])
            .unwrap_or_default(),
    }
}
