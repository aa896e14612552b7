use super::node::*;

use std::sync::*;

///
/// Represents a branch in a rope
///
/// A branch joins two subtrees and caches the number of bytes stored under the
/// left one, which is what routes index and range lookups without visiting the
/// text itself. Either child may be absent: a freshly created branch has no
/// children at all and a length of 0.
///
#[derive(Clone, PartialEq, Debug)]
pub struct RopeBranch {
    /// The left-hand side of the branch (first part of the string)
    left: Option<Arc<RopeNode>>,

    /// The right-hand side of the branch
    right: Option<Arc<RopeNode>>,

    /// Cached number of bytes stored under the left subtree
    left_weight: usize,

    /// The total number of bytes stored under this branch
    length: usize
}

impl RopeBranch {
    ///
    /// Creates a new branch with no children
    ///
    pub fn new() -> RopeBranch {
        RopeBranch {
            left:           None,
            right:          None,
            left_weight:    0,
            length:         0
        }
    }

    ///
    /// Returns the total number of bytes stored under this branch
    ///
    pub fn len(&self) -> usize {
        self.length
    }

    ///
    /// Returns the cached number of bytes stored under the left subtree
    ///
    pub fn left_weight(&self) -> usize {
        self.left_weight
    }

    /// The left child of this branch, if it has one
    pub fn left(&self) -> Option<&Arc<RopeNode>> {
        self.left.as_ref()
    }

    /// The right child of this branch, if it has one
    pub fn right(&self) -> Option<&Arc<RopeNode>> {
        self.right.as_ref()
    }

    ///
    /// Replaces the left child of this branch
    ///
    /// The cached weight and length are adjusted by the difference between the
    /// old and new subtree, so this never needs to retraverse the tree.
    ///
    pub fn set_left(&mut self, node: Arc<RopeNode>) {
        let new_weight      = node.len();

        self.length         = self.length - self.left_weight + new_weight;
        self.left_weight    = new_weight;
        self.left           = Some(node);
    }

    ///
    /// Replaces the right child of this branch
    ///
    /// As with `set_left`, the cached length is adjusted by the difference
    /// between the old and new subtree.
    ///
    pub fn set_right(&mut self, node: Arc<RopeNode>) {
        let old_len         = self.right.as_ref().map(|right| right.len()).unwrap_or(0);

        self.length         = self.length - old_len + node.len();
        self.right          = Some(node);
    }

    ///
    /// Recomputes the cached weight and length of this branch and every
    /// descendant from the leaf fragments upward
    ///
    /// This is the bulk repair used after structural surgery that bypassed the
    /// setters. Children are updated through `Arc::make_mut`, so a subtree that
    /// is shared with another rope is cloned rather than written through.
    ///
    /// A right child that is the very same node as the left child is only
    /// recomputed once (and the alias is kept intact), but its length still
    /// counts towards this branch twice: the two slots are independent
    /// subtrees as far as sizing is concerned.
    ///
    pub fn recompute_len(&mut self) -> usize {
        // Check for an aliased right child before the left-hand side is updated (make_mut can replace the Arc)
        let aliased     = match (&self.left, &self.right) {
            (Some(left), Some(right))   => Arc::ptr_eq(left, right),
            _                           => false
        };

        // Repair the left subtree
        let left_len    = match &mut self.left {
            Some(left)  => Arc::make_mut(left).recompute_len(),
            None        => 0
        };

        // Repair the right subtree, re-pointing it at the left one if the two were aliased
        let right_len   = if aliased {
            self.right = self.left.clone();
            left_len
        } else {
            match &mut self.right {
                Some(right) => Arc::make_mut(right).recompute_len(),
                None        => 0
            }
        };

        // Rebuild the cached sizes from the subtree results
        self.left_weight    = left_len;
        self.length         = left_len + right_len;

        self.length
    }
}
