//!
//! `cow_rope` is an implementation of the rope data structure built around
//! shared subtrees and a copy-on-write mutation discipline.
//!
//! Ropes are an extension of the string type that support efficient
//! concatenation and substring extraction over very large amounts of data: the
//! text is kept as a tree of short immutable fragments, so neither operation
//! needs to copy the characters it touches.
//!
//! `cow_rope` leans on two properties of that tree:
//!
//!  * Fragments and whole subtrees can be shared between any number of ropes.
//!    Cloning a rope duplicates only its structural nodes, concatenation
//!    allocates a single node, and a substring reuses every fragment that the
//!    requested range covers in full.
//!  * Nothing is ever written through a shared node. Mutation builds fresh
//!    nodes (or clones a shared one first), so every handle to a rope behaves
//!    like an independent snapshot.
//!
//! Substrings are rebuilt as balanced trees from the run of fragments they
//! touch, keeping lookups logarithmic regardless of how fragmented the source
//! rope had become.
//!
//! Indexing is defined over bytes rather than characters: the rope neither
//! knows nor cares about character encodings, and `to_string_lossy` is the
//! bridge back to UTF-8 text.
//!
//! ## Examples
//!
//! Extracting a substring from a rope
//!
//! ```
//! use cow_rope::*;
//!
//! let rope        = CowRope::from("**HI**");
//! let substring   = rope.substring(2, 4).unwrap();
//!
//! assert!(substring.to_string_lossy() == "HI");
//! assert!(substring.len() == 2);
//! ```

pub mod rope;

pub use crate::rope::*;
