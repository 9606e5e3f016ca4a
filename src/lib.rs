//! A Binary Search Tree (BST) built from sorted input, with explicit
//! rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! This crate's [`Tree`] does not self-balance on mutation. Instead it is
//! built balanced from a sorted sequence ([`Tree::from_sorted`]) and can be
//! rebuilt on demand ([`Tree::rebalance`]) after a run of inserts and
//! deletes has skewed it. [`Tree::is_balanced`] reports whether a rebuild
//! is worthwhile.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
//!
//! assert_eq!(tree.height(), Some(2));
//! assert!(tree.is_balanced());
//!
//! tree.insert(4)?;
//! assert!(tree.find(&4).is_some());
//!
//! let removed = tree.delete(&3)?;
//! assert_eq!(removed, 3);
//! # Ok::<(), balanced_bst::Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod queue;
pub mod tree;

mod error;

pub use error::Error;
pub use queue::Queue;
pub use tree::{Node, Tree};
