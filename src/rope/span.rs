use super::node::*;

use std::sync::*;

///
/// The ordered run of leaves touched by a substring request
///
pub (super) struct LeafSpan {
    /// The leaves the range passes through, leftmost first
    pub leaves: Vec<Arc<RopeNode>>,

    /// Offset of the range start within the first leaf
    pub start_offset: usize
}

///
/// Collects the leaves spanning `start..end` under a node, in order
///
/// The caller is responsible for validating the range: `start < end` and
/// `end <= node.len()` must already hold.
///
pub (super) fn collect_leaf_span(root: &Arc<RopeNode>, start: usize, end: usize) -> LeafSpan {
    let mut span = LeafSpan { leaves: vec![], start_offset: 0 };

    collect_leaves(root, start, end, false, true, &mut span);

    span
}

///
/// Walks the tree under a node, pushing every leaf that `start..end` touches
///
/// Two flags describe where the walk stands relative to the range boundaries,
/// and are passed down explicitly rather than captured:
///
///  * `found_start` is true once the leaf containing the range start has been
///    located; from then on every leaf is taken from its first byte.
///  * `bounded` is true while the walk is still heading towards the leaf
///    containing the range end; once false, everything to the subtree's end is
///    taken.
///
/// The paths to the two boundary leaves share a prefix and then diverge at
/// some branch: there the left arm continues with `bounded` cleared and the
/// right arm with `found_start` set, which is what makes the walk pick up
/// every interior leaf between the boundaries, in left-to-right order.
///
/// `start` and `end` are relative to the subtree and only meaningful while the
/// corresponding flag says the boundary is still ahead.
///
fn collect_leaves(node: &Arc<RopeNode>, start: usize, end: usize, found_start: bool, bounded: bool, span: &mut LeafSpan) {
    match &**node {
        RopeNode::Leaf(_) => {
            // The first leaf reached before the start is found is the one containing it
            if !found_start {
                span.start_offset = start;
            }

            span.leaves.push(Arc::clone(node));
        }

        RopeNode::Branch(branch) => {
            let weight          = branch.left_weight();

            // Which side each boundary falls on at this branch
            let take_left       = found_start || start < weight;
            let ends_in_left    = bounded && end <= weight;

            if take_left {
                if let Some(left) = branch.left() {
                    // The walk stays bounded on the left only if the end falls there too
                    collect_leaves(left, start, end, found_start, ends_in_left, span);
                }
            }

            if !ends_in_left {
                if let Some(right) = branch.right() {
                    // Once the left-hand side was taken, the start lies at or before the right subtree
                    collect_leaves(right, start.saturating_sub(weight), end.saturating_sub(weight), take_left, bounded, span);
                }
            }
        }
    }
}

///
/// Slices a leaf span down to the leaves of a substring of `count` bytes
///
/// The first leaf contributes from the span's start offset to its end, every
/// interior leaf contributes in full, and the final leaf only the prefix that
/// completes the requested count. That prefix is found by subtracting each
/// leaf's contribution from the remaining count as the run is walked; leaf
/// boundaries are never assumed to line up with the range end.
///
/// A leaf consumed in full is reused by reference; a partially consumed leaf
/// becomes a fresh leaf holding just its slice.
///
pub (super) fn slice_leaves(span: LeafSpan, count: usize) -> Vec<Arc<RopeNode>> {
    let mut sliced      = Vec::with_capacity(span.leaves.len());
    let mut remaining   = count;

    for (pos, leaf) in span.leaves.iter().enumerate() {
        let fragment = match &**leaf {
            RopeNode::Leaf(fragment)    => fragment,
            RopeNode::Branch(_)         => { debug_assert!(false, "Leaf span contains a branch node"); continue; }
        };

        // Only the first leaf starts anywhere other than its first byte
        let from    = if pos == 0 { span.start_offset } else { 0 };
        let take    = remaining.min(fragment.len() - from);

        if from == 0 && take == fragment.len() {
            // The whole leaf is consumed, so it can be shared with the substring
            sliced.push(Arc::clone(leaf));
        } else {
            sliced.push(Arc::new(RopeNode::leaf(&fragment[from..from + take])));
        }

        remaining -= take;
        if remaining == 0 {
            break;
        }
    }

    debug_assert!(remaining == 0, "Leaf span was too short for the requested substring");

    sliced
}
