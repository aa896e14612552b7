use super::node::*;

use std::sync::*;

///
/// Rebuilds a balanced tree from an ordered, non-empty run of leaves
///
/// Classic bottom-up pairwise merge: adjacent nodes are joined under fresh
/// branches, an odd final node is carried to the next level unpaired (always
/// the rightmost one, so the run is never reordered), and the levels repeat
/// until a single node remains. The result has depth `O(log n)` in the leaf
/// count regardless of how fragmented the source was.
///
/// The returned root is always a branch: a lone surviving leaf gets a branch
/// placed above it.
///
pub (super) fn reconstruct(leaves: Vec<Arc<RopeNode>>) -> Arc<RopeNode> {
    let mut level = leaves;

    // Merge pairwise until a single node remains
    while level.len() > 1 {
        let mut merged  = Vec::with_capacity(level.len() / 2 + 1);
        let mut nodes   = level.into_iter();

        while let Some(first) = nodes.next() {
            match nodes.next() {
                Some(second) => {
                    // Join the pair under a fresh branch
                    let mut branch = RopeNode::branch();

                    branch.set_left(first);
                    branch.set_right(second);

                    merged.push(Arc::new(branch));
                }

                None => {
                    // Odd node out: carry it to the next level unpaired
                    merged.push(first);
                }
            }
        }

        level = merged;
    }

    match level.pop() {
        Some(root) => {
            if root.is_leaf() {
                // A rope root is always a branch, so a lone leaf gets one above it
                let mut branch = RopeNode::branch();
                branch.set_left(root);

                Arc::new(branch)
            } else {
                root
            }
        }

        // An empty run reconstructs to an empty rope
        None => Arc::new(RopeNode::branch())
    }
}
