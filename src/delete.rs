use tracing::trace;

use crate::{
    fragments::FragmentSet,
    interval::{Interval, Placement},
    node::{NodeId, Side},
    Error, Tree,
};

/// A single interval deletion pass over a [`Tree`].
///
/// The pass removes every in-interval node, cutting the tree into
/// disconnected fragments as it goes. Each surviving fragment root is
/// registered in a [`FragmentSet`] for reassembly.
#[derive(Debug)]
pub(crate) struct Deletion<'a> {
    tree: &'a mut Tree,
    interval: Interval,
    fragments: FragmentSet,
    deleted: usize,
}

impl<'a> Deletion<'a> {
    pub(crate) fn new(tree: &'a mut Tree, interval: Interval) -> Self {
        Self {
            tree,
            interval,
            fragments: FragmentSet::default(),
            deleted: 0,
        }
    }

    /// Run the pass to completion, returning the surviving fragments and the
    /// number of removed nodes.
    pub(crate) fn run(mut self) -> Result<(FragmentSet, usize), Error> {
        let root = match self.tree.root() {
            Some(v) => v,
            None => return Ok((self.fragments, 0)),
        };

        if self.classify(root) != Placement::InInterval {
            self.register(root);
        }

        // Descend towards the interval. Everything right of a bigger node and
        // left of a smaller node survives untouched, so only one child is
        // ever followed.
        let mut ptr = Some(root);
        while let Some(v) = ptr {
            ptr = match self.classify(v) {
                Placement::Bigger => {
                    self.sever_crossing(v, Placement::Bigger);
                    self.tree.node(v).left()
                }
                Placement::Smaller => {
                    self.sever_crossing(v, Placement::Smaller);
                    self.tree.node(v).right()
                }
                Placement::InInterval => {
                    self.remove(v)?;
                    None
                }
            };
        }

        Ok((self.fragments, self.deleted))
    }

    fn classify(&self, id: NodeId) -> Placement {
        self.interval.classify(self.tree.key(id))
    }

    fn register(&mut self, root: NodeId) {
        debug_assert!(self.tree.node(root).parent().is_none());
        self.fragments.register(self.tree.key(root), root);
    }

    /// Cut `id` from its parent if the edge between them crosses the
    /// interval (a bigger node below a smaller one, or vice versa).
    ///
    /// Both the detached subtree and the fragment the parent remains in are
    /// registered.
    fn sever_crossing(&mut self, id: NodeId, placement: Placement) {
        let parent = match self.tree.node(id).parent() {
            Some(v) => v,
            None => return,
        };

        if Some(self.classify(parent)) != placement.opposite() {
            return;
        }

        self.tree.detach(id);
        self.register(id);

        let top = self.tree.top(parent);
        self.register(top);

        trace!(
            key = self.tree.key(id),
            parent = self.tree.key(parent),
            fragment = self.tree.key(top),
            "cut crossing edge"
        );
    }

    /// Remove the in-interval node `target` and every in-interval node
    /// reachable through it.
    fn remove(&mut self, target: NodeId) -> Result<(), Error> {
        let mut worklist = vec![target];

        while let Some(v) = worklist.pop() {
            self.deleted += 1;
            self.tree.detach(v);

            trace!(key = self.tree.key(v), "removed node");

            for side in [Side::Right, Side::Left] {
                let child = match self.tree.node(v).child(side) {
                    Some(c) => c,
                    None => continue,
                };

                match (side, self.classify(child)) {
                    (_, Placement::InInterval) => worklist.push(child),
                    (Side::Right, Placement::Bigger) | (Side::Left, Placement::Smaller) => {
                        self.tree.detach(child);
                        self.register(child);

                        // The inner edge of the detached subtree (the left
                        // spine of a right child) may still reach back into
                        // the interval.
                        let inner = side.flip();
                        let start = self.tree.node(child).child(inner);
                        if let Some(next) = self.first_in_interval(start, inner) {
                            worklist.push(next);
                        }
                    }
                    (side, placement) => {
                        return Err(Error::MisplacedChild {
                            parent: self.tree.key(v),
                            child: self.tree.key(child),
                            side,
                            placement,
                        });
                    }
                }
            }

            debug_assert!(self.tree.node(v).parent().is_none());
        }

        Ok(())
    }

    /// Follow `side` links from `start` until the first in-interval node.
    fn first_in_interval(&self, start: Option<NodeId>, side: Side) -> Option<NodeId> {
        let mut ptr = start;
        while let Some(v) = ptr {
            if self.classify(v) == Placement::InInterval {
                return Some(v);
            }
            ptr = self.tree.node(v).child(side);
        }
        None
    }
}
