//! Delete every key within a closed interval from a binary search tree,
//! splicing the surviving pieces back into a single tree.
//!
//! Removing a run of keys from a BST tears it into disconnected fragments,
//! each of which is still a valid BST. Rather than rebuilding the result key
//! by key, [`Tree::delete_interval()`] reassembles it by recursively
//! promoting the fragment that holds the median surviving key, reusing each
//! fragment's existing shape as a whole.
//!
//! ```
//! use interprune::{Interval, Tree};
//!
//! //          10
//! //         /  \
//! //        5    15
//! //       / \   / \
//! //      3   7 12  18
//! let mut tree = Tree::from_keys([10, 5, 15, 3, 7, 12, 18])?;
//!
//! let pruned = tree.delete_interval(&Interval::new(6, 13)?)?;
//!
//! assert_eq!(pruned.deleted, 3);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [3, 5, 15, 18]);
//! assert_eq!(pruned.shape.height, 2);
//! # Ok::<_, interprune::Error>(())
//! ```
//!
//! The tree is unbalanced: no rotations are performed on insert, and the
//! reassembled tree is only as balanced as median selection over whole
//! fragments allows.

#![deny(missing_docs, clippy::todo, clippy::dbg_macro)]

mod delete;
mod dot;
mod error;
mod fragments;
mod interval;
mod iter;
mod merge;
mod node;
pub mod reader;
mod shape;
mod tree;

#[cfg(test)]
mod test_utils;

pub use dot::Dot;
pub use error::Error;
pub use interval::{Interval, Placement};
pub use iter::Keys;
pub use node::Side;
pub use shape::Shape;
pub use tree::{Pruned, Tree};
