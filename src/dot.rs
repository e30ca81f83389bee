use std::fmt::Display;

use crate::Tree;

/// A [Graphviz] rendering of a [`Tree`], returned by [`Tree::dot()`].
///
/// [Graphviz]: https://graphviz.org/
#[derive(Debug)]
pub struct Dot<'a>(&'a Tree);

impl Tree {
    /// Render this tree as a Graphviz `digraph`, with empty child slots drawn
    /// as invisible points so left and right children keep their sides.
    pub fn dot(&self) -> Dot<'_> {
        Dot(self)
    }
}

impl Display for Dot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = self.0;

        writeln!(f, "digraph {{")?;

        // Perform a pre-order traversal of the tree.
        let mut stack = t.root().into_iter().collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            let n = t.node(id);
            let key = n.key();

            for (side, child) in [("l", n.left()), ("r", n.right())] {
                match child {
                    Some(c) => {
                        writeln!(f, "{} -> {};", key, t.key(c))?;
                    }
                    None => {
                        writeln!(f, "null_{}_{} [shape=point,style=invis];", key, side)?;
                        writeln!(f, "{} -> null_{}_{} [style=invis];", key, key, side)?;
                    }
                }
            }

            // Push right first so the left subtree is written first.
            stack.extend(n.right());
            stack.extend(n.left());
        }

        writeln!(f, "}}")
    }
}
