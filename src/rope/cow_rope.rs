use super::node::*;
use super::error::*;
use super::span::*;
use super::reconstruct::*;

use std::fmt;
use std::sync::*;

///
/// A rope that shares its subtrees and copies before it writes
///
/// The rope owns a single handle to the root of its tree; the tree itself may
/// be shared with any number of other ropes, because every operation that
/// produces a new rope reuses existing subtrees instead of copying them.
/// Concatenation allocates one branch, a substring reuses every fragment it
/// covers in full, and cloning duplicates only the structural nodes.
///
/// What keeps the sharing safe is that no operation ever writes through a node
/// that could have more than one owner: mutation always builds fresh nodes, so
/// every handle behaves like an independent snapshot. Reading from any number
/// of handles at once is likewise fine.
///
/// All positions are byte offsets. The rope holds bytes and treats them as
/// opaque fixed-size units; `to_string_lossy` converts back to text.
///
pub struct CowRope {
    /// The root of this rope's tree (always a branch)
    pub (super) root: Arc<RopeNode>
}

impl CowRope {
    ///
    /// Creates a new, empty rope
    ///
    pub fn new() -> CowRope {
        CowRope {
            root: Arc::new(RopeNode::branch())
        }
    }

    ///
    /// Creates a rope around an already-built root node
    ///
    fn from_root(root: Arc<RopeNode>) -> CowRope {
        CowRope { root }
    }

    ///
    /// Returns a second handle to this rope's tree
    ///
    /// The new handle shares the root outright, so this is O(1) and the two
    /// ropes are indistinguishable until one of them is edited. It is also how
    /// a rope can be concatenated with itself: `rope.append(&rope.share())`
    /// builds a tree whose two halves are the same shared subtree.
    ///
    pub fn share(&self) -> CowRope {
        CowRope {
            root: Arc::clone(&self.root)
        }
    }

    ///
    /// Returns the number of bytes in this rope
    ///
    pub fn len(&self) -> usize {
        self.root.len()
    }

    ///
    /// True if this rope contains no bytes
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Returns the byte at an offset in this rope
    ///
    /// At every branch the cached left weight decides which side the offset
    /// falls on, so the lookup costs one descent of the tree. Offsets at or
    /// past the end of the rope return `RopeError::OutOfRange`.
    ///
    pub fn byte_at(&self, index: usize) -> Result<u8, RopeError> {
        let out_of_range    = RopeError::OutOfRange { index, len: self.len() };

        let mut node        = &self.root;
        let mut offset      = index;

        // Hunt for the leaf containing the offset
        loop {
            match &**node {
                RopeNode::Leaf(fragment) => {
                    return fragment.get(offset).copied().ok_or(out_of_range);
                }

                RopeNode::Branch(branch) => {
                    if offset < branch.left_weight() {
                        // The offset is under the left subtree
                        node = match branch.left() {
                            Some(left)  => left,
                            None        => { return Err(out_of_range); }
                        };
                    } else {
                        // The offset is under the right subtree, relative to the end of the left one
                        offset -= branch.left_weight();

                        node = match branch.right() {
                            Some(right) => right,
                            None        => { return Err(out_of_range); }
                        };
                    }
                }
            }
        }
    }

    ///
    /// Returns the contents of this rope as a string
    ///
    /// Fragments are gathered into a single buffer in one pass; any fragment
    /// boundary that split a multi-byte character shows up as a replacement
    /// character.
    ///
    pub fn to_string_lossy(&self) -> String {
        self.root.to_string_lossy()
    }

    ///
    /// Appends another rope to the end of this one
    ///
    /// This is O(1): the new root is a single branch whose left side is this
    /// rope's old tree and whose right side is the other rope's tree, both
    /// shared rather than copied.
    ///
    pub fn append(&mut self, other: &CowRope) {
        let mut root = RopeNode::branch();

        root.set_left(Arc::clone(&self.root));
        root.set_right(Arc::clone(&other.root));

        self.root = Arc::new(root);
    }

    ///
    /// Prepends another rope to the start of this one
    ///
    /// O(1), as for `append`, with the other rope's tree on the left.
    ///
    pub fn prepend(&mut self, other: &CowRope) {
        let mut root = RopeNode::branch();

        root.set_left(Arc::clone(&other.root));
        root.set_right(Arc::clone(&self.root));

        self.root = Arc::new(root);
    }

    ///
    /// Builds a new rope from the byte range `start..end` of this one
    ///
    /// A range that runs backwards or past the end of the rope returns
    /// `RopeError::InvalidRange` before anything is traversed. An empty range
    /// is an empty rope.
    ///
    /// Otherwise the run of leaves the range touches is located, sliced (whole
    /// leaves are shared with the new rope, partial ones become fresh leaves)
    /// and rebuilt bottom-up into a balanced tree, so the substring's depth is
    /// logarithmic in the number of fragments it spans however unbalanced this
    /// rope was.
    ///
    pub fn substring(&self, start: usize, end: usize) -> Result<CowRope, RopeError> {
        // Validate the range before any traversal
        if start > end || end > self.len() {
            return Err(RopeError::InvalidRange { start, end, len: self.len() });
        }

        // An empty range short-circuits to an empty rope
        if start == end {
            return Ok(CowRope::new());
        }

        // Locate the leaves the range passes through, slice them down to the range and rebalance
        let span    = collect_leaf_span(&self.root, start, end);
        let leaves  = slice_leaves(span, end - start);

        Ok(CowRope::from_root(reconstruct(leaves)))
    }
}

impl Default for CowRope {
    fn default() -> CowRope {
        CowRope::new()
    }
}

impl Clone for CowRope {
    ///
    /// Copies this rope
    ///
    /// Structural nodes are duplicated so the copy's bookkeeping is entirely
    /// its own, but the leaves are shared: copying pays for the shape of the
    /// tree, never for the text.
    ///
    fn clone(&self) -> CowRope {
        CowRope {
            root: RopeNode::deep_copy(&self.root)
        }
    }
}

impl From<&str> for CowRope {
    ///
    /// Creates a rope containing a string value, as a single fragment
    ///
    fn from(string: &str) -> CowRope {
        let mut root = RopeNode::branch();
        root.set_left(Arc::new(RopeNode::leaf(string.as_bytes())));

        CowRope::from_root(Arc::new(root))
    }
}

impl From<String> for CowRope {
    fn from(string: String) -> CowRope {
        CowRope::from(string.as_str())
    }
}

impl fmt::Display for CowRope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for CowRope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("CowRope").field(&self.to_string_lossy()).finish()
    }
}
