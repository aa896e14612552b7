use super::branch::*;

use std::sync::*;

///
/// A node in a rope
///
/// Leaves own a short immutable fragment of the rope's text; branches join two
/// subtrees and cache their sizes. The two cases never mix: a leaf has no
/// children and a branch stores no text of its own.
///
#[derive(Clone, PartialEq, Debug)]
pub enum RopeNode {
    /// A leaf node owns an immutable fragment of the rope's text
    Leaf(Arc<[u8]>),

    /// A branch node joins two subtrees
    Branch(RopeBranch)
}

impl RopeNode {
    ///
    /// Creates a leaf node wrapping a text fragment
    ///
    pub fn leaf<Fragment: Into<Arc<[u8]>>>(fragment: Fragment) -> RopeNode {
        RopeNode::Leaf(fragment.into())
    }

    ///
    /// Creates a branch node with no children
    ///
    pub fn branch() -> RopeNode {
        RopeNode::Branch(RopeBranch::new())
    }

    ///
    /// Returns the number of bytes stored under this node
    ///
    /// For a branch this reads the cached length, so it never traverses the
    /// tree.
    ///
    pub fn len(&self) -> usize {
        match self {
            RopeNode::Leaf(fragment)    => fragment.len(),
            RopeNode::Branch(branch)    => branch.len()
        }
    }

    ///
    /// True if this node is a leaf
    ///
    pub fn is_leaf(&self) -> bool {
        matches!(self, RopeNode::Leaf(_))
    }

    ///
    /// Replaces the left child of this node
    ///
    /// Leaves have no children, so this does nothing when called on one.
    ///
    pub fn set_left(&mut self, node: Arc<RopeNode>) {
        match self {
            RopeNode::Branch(branch)    => branch.set_left(node),
            RopeNode::Leaf(_)           => { debug_assert!(false, "Tried to set the left child of a leaf node"); }
        }
    }

    ///
    /// Replaces the right child of this node
    ///
    /// Leaves have no children, so this does nothing when called on one.
    ///
    pub fn set_right(&mut self, node: Arc<RopeNode>) {
        match self {
            RopeNode::Branch(branch)    => branch.set_right(node),
            RopeNode::Leaf(_)           => { debug_assert!(false, "Tried to set the right child of a leaf node"); }
        }
    }

    ///
    /// Recomputes the cached sizes of this node and every descendant from the
    /// leaf fragments upward
    ///
    /// See `RopeBranch::recompute_len` for how shared and aliased children are
    /// handled.
    ///
    pub fn recompute_len(&mut self) -> usize {
        match self {
            RopeNode::Leaf(fragment)    => fragment.len(),
            RopeNode::Branch(branch)    => branch.recompute_len()
        }
    }

    ///
    /// Appends the text under this node to a buffer, in left-to-right order
    ///
    /// The buffer is threaded through the whole traversal, so flattening a
    /// rope builds exactly one allocation however deep the tree is.
    ///
    pub fn flatten_into(&self, out: &mut Vec<u8>) {
        match self {
            RopeNode::Leaf(fragment)    => out.extend_from_slice(fragment),

            RopeNode::Branch(branch)    => {
                if let Some(left) = branch.left() {
                    left.flatten_into(out);
                }
                if let Some(right) = branch.right() {
                    right.flatten_into(out);
                }
            }
        }
    }

    ///
    /// Returns the text under this node as a string
    ///
    /// The rope stores bytes, so any fragment boundary that split a multi-byte
    /// character shows up as a replacement character here.
    ///
    pub fn to_string_lossy(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        self.flatten_into(&mut bytes);

        String::from_utf8_lossy(&bytes).into()
    }

    ///
    /// Copies the tree under a node
    ///
    /// Branches are duplicated recursively, but a leaf is reused by reference:
    /// leaves are immutable, so sharing them between the copy and the original
    /// is always safe. This is what makes copying a rope pay only for its
    /// structural nodes and never for its text.
    ///
    pub fn deep_copy(node: &Arc<RopeNode>) -> Arc<RopeNode> {
        match &**node {
            // Leaves are immutable and can be shared with the copy
            RopeNode::Leaf(_)           => Arc::clone(node),

            // Branches are duplicated so the copy's bookkeeping is its own
            RopeNode::Branch(branch)    => {
                let mut copy = RopeBranch::new();

                if let Some(left) = branch.left() {
                    copy.set_left(RopeNode::deep_copy(left));
                }
                if let Some(right) = branch.right() {
                    copy.set_right(RopeNode::deep_copy(right));
                }

                Arc::new(RopeNode::Branch(copy))
            }
        }
    }
}
