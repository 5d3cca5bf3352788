//! Walking a [`Tree`] in level, in, pre, or post order.
//!
//! Every order is available lazily through [`Tree::iter`] and eagerly through a visitor, either
//! one of the per-order methods ([`Tree::in_order`] and friends) or [`Tree::traverse`] when the
//! order and visitor are only known at runtime.
//!
//! # Examples
//!
//! ```
//! use bst_rebuild::{Order, Tree};
//!
//! let tree = Tree::build(1..=7);
//!
//! let level: Vec<_> = tree.iter(Order::Level).copied().collect();
//! assert_eq!(level, vec![4, 2, 6, 1, 3, 5, 7]);
//!
//! let mut post = Vec::new();
//! tree.post_order(|key| post.push(*key));
//! assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{TreeError, TreeResult};
use crate::tree::{Node, Tree};

/// The order in which a traversal visits the keys of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then each level from left to right.
    Level,
    /// Left subtree, node, right subtree. Keys come out sorted.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

impl Order {
    /// Every order, in the order they're declared.
    pub const ALL: [Order; 4] = [Order::Level, Order::In, Order::Pre, Order::Post];
}

/// An iterator over the keys of a [`Tree`] in a given [`Order`]. Created by [`Tree::iter`].
#[derive(Debug)]
pub struct Traversal<'a, K> {
    order: Order,
    pending: VecDeque<Frame<'a, K>>,
}

/// Work left to do for a traversal.
#[derive(Debug)]
enum Frame<'a, K> {
    /// The whole subtree still has to be walked.
    Expand(&'a Node<K>),
    /// Only the node's own key is left.
    Emit(&'a Node<K>),
}

impl<'a, K> Traversal<'a, K> {
    fn new(order: Order, root: Option<&'a Node<K>>) -> Self {
        Self {
            order,
            pending: root.map(Frame::Expand).into_iter().collect(),
        }
    }

    /// Level order uses `pending` as a FIFO queue: the node discovered first is visited first.
    fn next_breadth_first(&mut self) -> Option<&'a K> {
        let (Frame::Expand(node) | Frame::Emit(node)) = self.pending.pop_front()?;
        self.pending.extend(node.left().map(Frame::Expand));
        self.pending.extend(node.right().map(Frame::Expand));
        Some(node.key())
    }

    /// The other orders use `pending` as a stack. Expanding a subtree pushes its parts in
    /// reverse so the part to visit first ends up on top.
    fn next_depth_first(&mut self) -> Option<&'a K> {
        loop {
            let node = match self.pending.pop_back()? {
                Frame::Emit(node) => return Some(node.key()),
                Frame::Expand(node) => node,
            };
            let left = node.left().map(Frame::Expand);
            let right = node.right().map(Frame::Expand);
            let this = Some(Frame::Emit(node));
            let frames = match self.order {
                Order::In => [right, this, left],
                Order::Pre => [right, left, this],
                Order::Post => [this, right, left],
                Order::Level => unreachable!("level order is breadth first"),
            };
            self.pending.extend(frames.into_iter().flatten());
        }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        match self.order {
            Order::Level => self.next_breadth_first(),
            Order::In | Order::Pre | Order::Post => self.next_depth_first(),
        }
    }
}

impl<K> FusedIterator for Traversal<'_, K> {}

/// Iterating over a `&Tree` yields its keys in ascending order.
impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Traversal<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::In)
    }
}

impl<K> Tree<K> {
    /// An iterator over the keys of the tree in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::{Order, Tree};
    ///
    /// let tree = Tree::build([2, 1, 3]);
    ///
    /// assert!(tree.iter(Order::In).eq(&[1, 2, 3]));
    /// assert!(tree.iter(Order::Pre).eq(&[2, 1, 3]));
    /// ```
    pub fn iter(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(order, self.root())
    }

    /// Calls `visitor` with every key of the tree in the given order.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingVisitor`] when no visitor is given. Nothing is visited in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::{Order, Tree, TreeError};
    ///
    /// let tree = Tree::build([2, 1, 3]);
    ///
    /// let mut sum = 0;
    /// tree.traverse(Order::Post, Some(&mut |key: &i32| sum += *key))?;
    /// assert_eq!(sum, 6);
    ///
    /// assert_eq!(tree.traverse(Order::Level, None), Err(TreeError::MissingVisitor));
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn traverse(&self, order: Order, visitor: Option<&mut dyn FnMut(&K)>) -> TreeResult<()> {
        let visit = visitor.ok_or(TreeError::MissingVisitor)?;
        for key in self.iter(order) {
            visit(key);
        }
        Ok(())
    }

    /// Calls `visitor` with every key, level by level, starting at the root.
    pub fn level_order(&self, visitor: impl FnMut(&K)) {
        self.iter(Order::Level).for_each(visitor);
    }

    /// Calls `visitor` with every key in ascending order.
    pub fn in_order(&self, visitor: impl FnMut(&K)) {
        self.iter(Order::In).for_each(visitor);
    }

    /// Calls `visitor` with every key, each node before its subtrees.
    pub fn pre_order(&self, visitor: impl FnMut(&K)) {
        self.iter(Order::Pre).for_each(visitor);
    }

    /// Calls `visitor` with every key, each node after its subtrees.
    pub fn post_order(&self, visitor: impl FnMut(&K)) {
        self.iter(Order::Post).for_each(visitor);
    }
}
