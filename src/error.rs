use thiserror::Error;

use crate::{interval::Placement, node::Side};

/// Errors raised while building a [`Tree`](crate::Tree) or deleting an
/// interval from it.
///
/// Every variant other than [`Error::InvalidInterval`] and
/// [`Error::DuplicateKey`] reports a broken structural invariant. These are
/// fatal: the operation that raised them produces no result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The interval lower bound is greater than the upper bound.
    #[error("invalid interval: lower bound {lo} exceeds upper bound {hi}")]
    InvalidInterval {
        /// Lower bound.
        lo: i64,
        /// Upper bound.
        hi: i64,
    },

    /// The key is already present in the tree.
    #[error("duplicate key {0}")]
    DuplicateKey(i64),

    /// A child was found on the wrong side of a node being removed, such as a
    /// key below the interval in the right subtree of an in-interval node.
    #[error("corrupt tree: {side} child {child} of {parent} is {placement}")]
    MisplacedChild {
        /// Key of the node being removed.
        parent: i64,
        /// Key of the offending child.
        child: i64,
        /// The side of `parent` the child hangs from.
        side: Side,
        /// Where the child key falls relative to the interval.
        placement: Placement,
    },

    /// No surviving fragment contains the key.
    #[error("no surviving fragment contains key {key}")]
    Containment {
        /// The key being searched for.
        key: i64,
    },

    /// Two adjacent fragments have interleaving key ranges.
    #[error("fragment key ranges overlap: {left} is not below {right}")]
    OverlappingFragments {
        /// Largest key of the earlier fragment.
        left: i64,
        /// Smallest key of the following fragment.
        right: i64,
    },
}
