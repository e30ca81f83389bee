//! Reassembly of surviving fragments into a single tree.
//!
//! The surviving key sequence is split recursively at its median. The
//! fragment holding the median key is promoted whole to be the root of that
//! sub-range, and the key ranges either side of the fragment are reassembled
//! and hung below its minimum and maximum nodes.
//!
//! ```text
//!   keys:  1  2  3 [4  5  6  7] 8  9
//!                      ^ median, held by fragment [4, 7]
//!
//!             6                      6
//!            / \                    / \
//!           5   7     splice       5   7
//!          /        ----------->  /     \
//!         4                      4       8'
//!                               /
//!                              2'
//! ```
//!
//! Where `2'` and `8'` are the roots of the reassembled `[1, 3]` and `[8, 9]`
//! ranges.

use std::ops::Range;

use tracing::trace;

use crate::{
    fragments::Survivors,
    node::{NodeId, Side},
    Error, Tree,
};

/// Splice every fragment in `survivors` into one tree, returning its root.
pub(crate) fn reassemble(tree: &mut Tree, survivors: &Survivors) -> Result<Option<NodeId>, Error> {
    merge(tree, survivors, 0..survivors.keys().len())
}

fn merge(
    tree: &mut Tree,
    survivors: &Survivors,
    range: Range<usize>,
) -> Result<Option<NodeId>, Error> {
    if range.is_empty() {
        return Ok(None);
    }

    let target = survivors.keys()[median(&range)];
    let fragment = *survivors.containing(tree, target)?;

    // The fragment is promoted whole, so it must lie entirely within the
    // sub-range being built.
    let span = survivors.span(&fragment)?;
    if span.start < range.start || span.end > range.end {
        return Err(Error::Containment { key: target });
    }

    trace!(
        target,
        fragment = tree.key(fragment.root),
        min = fragment.min,
        max = fragment.max,
        "promoted fragment"
    );

    let left = merge(tree, survivors, range.start..span.start)?;
    let right = merge(tree, survivors, span.end..range.end)?;

    // The minimum node of the fragment has no left child (and the maximum no
    // right child) so the gaps always hang from an empty link.
    if let Some(left) = left {
        let anchor = tree.extreme(fragment.root, Side::Left);
        tree.attach(anchor, Side::Left, left);
    }
    if let Some(right) = right {
        let anchor = tree.extreme(fragment.root, Side::Right);
        tree.attach(anchor, Side::Right, right);
    }

    Ok(Some(fragment.root))
}

/// The index of the lower median of the non-empty `range`.
fn median(range: &Range<usize>) -> usize {
    debug_assert!(!range.is_empty());
    range.start + range.len().div_ceil(2) - 1
}
