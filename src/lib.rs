//! This crate exposes a Binary Search Tree (BST) over a set of keys that is
//! balanced on demand instead of on every write.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the longest path
//! from the root `Node` to a leaf `Node`. Visiting the left subtree, then the
//! subtree root, then the right subtree yields the keys in sorted order.
//!
//! ## Balancing on demand
//!
//! [`Tree::build`] sorts and deduplicates its input and then picks the middle
//! key of every range as the subtree root, so a freshly built tree has a height
//! of about `lg N`. [`Tree::insert`] and [`Tree::delete`] don't rotate anything
//! afterwards, so a run of ascending inserts degrades the tree towards a linked
//! list. [`Tree::is_balanced`] tells when that has happened and
//! [`Tree::rebalance`] rebuilds the tree from its sorted keys.
//!
//! ```
//! use bst_rebuild::{Order, Tree};
//!
//! let mut tree = Tree::build([3, 1, 4, 1, 5, 9, 2, 6]);
//! tree.insert(200);
//!
//! assert!(tree.contains(&200));
//! assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 9, 200]);
//!
//! let level: Vec<_> = tree.iter(Order::Level).copied().collect();
//! assert_eq!(level, vec![4, 2, 6, 1, 3, 5, 9, 200]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod pretty;
mod traversal;
mod tree;

pub use error::{TreeError, TreeResult};
pub use traversal::{Order, Traversal};
pub use tree::{Node, Tree};
