//! A BST over a set of distinct keys that is only ever balanced on demand. The tree is built
//! perfectly balanced from its input, but `insert` and `delete` leave the shape wherever the
//! keys happen to land. Calling [`Tree::rebalance`] rebuilds the whole tree from its sorted keys.
//!
//! # Examples
//!
//! ```
//! use bst_rebuild::Tree;
//!
//! let mut tree = Tree::build([3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! // Duplicates are dropped and the keys come back sorted.
//! assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 9]);
//! assert!(tree.is_balanced());
//!
//! // Inserting an ascending run skews the tree to the right...
//! for key in 10..=20 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it's rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 18);
//! ```

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over distinct keys. This can be used for inserting, finding, and deleting
/// keys, for walking them in any of the four classic orders (see [`Order`][crate::Order]), and for
/// asking how tall or how balanced the tree currently is.
///
/// Two trees compare equal when they hold the same keys in the same shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A `Node` holds a key and owns up to two children. Every key in the left subtree is smaller
/// than `key` and every key in the right subtree is larger.
///
/// `Node`s are handed out read-only by [`Tree::find`] and [`Tree::root`].
// TODO the derived `Clone`, `Debug` and `PartialEq` all recurse once per level like `insert`
// does. Only `Drop` is stack based so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::build(keys)
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Gets the height of this tree. An empty tree has a height of `-1` and a tree with a single
    /// key has a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height(self.root())
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one. An empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Potentially finds the node holding the given key. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.key()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        self.root().and_then(|n| n.find(key))
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// How many edges separate the root from the node holding `key`. The root itself has a
    /// depth of `0`.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the tree does not hold `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::{Tree, TreeError};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Ok(0));
    /// assert_eq!(tree.depth(&3), Ok(1));
    /// assert_eq!(tree.depth(&4), Err(TreeError::KeyNotFound));
    /// ```
    pub fn depth(&self, key: &K) -> TreeResult<usize> {
        self.root().ok_or(TreeError::KeyNotFound)?.depth(key)
    }

    /// The depth of `node` in this tree. The node is located by its key, so a handle taken
    /// before the tree was reshaped still gives the key's current depth.
    ///
    /// # Errors
    ///
    /// [`TreeError::KeyNotFound`] if the tree does not hold the node's key.
    pub fn depth_of(&self, node: &Node<K>) -> TreeResult<usize> {
        self.depth(node.key())
    }
}

impl<K> Tree<K>
where
    K: Ord + Clone,
{
    /// Builds a balanced tree from any collection of keys. Duplicates are dropped and the rest
    /// are sorted before the tree is built, so the resulting shape only depends on the set of
    /// keys given.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree = Tree::build([5, 3, 5, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        let given = keys.len();
        keys.sort_unstable();
        keys.dedup();

        let tree = Self {
            root: build(&keys),
            len: keys.len(),
        };
        debug!(given, len = tree.len, height = tree.height(), "built tree");
        tree
    }

    /// Inserts the given key into the tree. Returns whether the key was new. Inserting a key
    /// that is already present leaves the tree untouched.
    ///
    /// The tree is not rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K) -> bool {
        let mut inserted = false;
        self.root = insert(self.root.take(), key, &mut inserted);
        if inserted {
            self.len += 1;
        }
        trace!(inserted, len = self.len, "insert");
        inserted
    }

    /// Deletes the given key from the tree. Returns whether the key was present.
    ///
    /// A node with two children takes the key of its in-order successor (the smallest key of its
    /// right subtree) and the successor's node is removed instead. The tree is not rebalanced
    /// afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.to_vec(), vec![1, 3]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, key: &K) -> bool {
        let mut removed = false;
        self.root = delete(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        trace!(removed, len = self.len, "delete");
        removed
    }

    /// Rebuilds the tree from its sorted keys so that it is balanced again. Rebalancing a tree
    /// that was just rebalanced (or built) gives back exactly the same shape.
    #[instrument(level = "trace", skip_all)]
    pub fn rebalance(&mut self) {
        let before = self.height();
        let keys = self.to_vec();
        self.root = build(&keys);
        debug!(len = self.len, before, after = self.height(), "rebalanced tree");
    }

    /// The keys of the tree in ascending order.
    pub fn to_vec(&self) -> Vec<K> {
        self.into_iter().cloned().collect()
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of `0`.
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }

    fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    fn depth(&self, key: &K) -> TreeResult<usize>
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Ok(0),
            Ordering::Greater => self.right(),
        };
        Ok(1 + child.ok_or(TreeError::KeyNotFound)?.depth(key)?)
    }
}

impl<K> Drop for Node<K> {
    // Dropping a skewed tree recursively could overflow the stack, so the children are detached
    // here and dropped one at a time.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Self>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// The height of a possibly empty subtree.
fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, Node::height)
}

/// The height of `node` if every node in its subtree is balanced, `None` otherwise.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    (left.abs_diff(right) <= 1).then(|| 1 + left.max(right))
}

/// Builds a balanced subtree from sorted, distinct keys. The middle key (rounding up for an even
/// number of keys) becomes the root so the split is always the same for the same keys.
fn build<K: Clone>(keys: &[K]) -> Link<K> {
    if keys.is_empty() {
        return None;
    }
    let mid = keys.len() / 2;
    Some(Box::new(Node {
        key: keys[mid].clone(),
        left: build(&keys[..mid]),
        right: build(&keys[mid + 1..]),
    }))
}

/// Inserts `key` into the subtree and returns its (possibly new) root.
fn insert<K: Ord>(link: Link<K>, key: K, inserted: &mut bool) -> Link<K> {
    let Some(mut node) = link else {
        *inserted = true;
        return Some(Node::new_boxed(key));
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key, inserted),
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert(node.right.take(), key, inserted),
    }
    Some(node)
}

/// Deletes `key` from the subtree and returns what should take the subtree's place.
fn delete<K: Ord + Clone>(link: Link<K>, key: &K, removed: &mut bool) -> Link<K> {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key, removed),
        Ordering::Greater => node.right = delete(node.right.take(), key, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                *removed = true;
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                *removed = true;
                return Some(child);
            }
            (Some(left), Some(right)) => {
                // The successor has no left child so deleting it below hits one of the cases
                // above and only one node is ever unlinked.
                let successor = smallest(&right).clone();
                node.left = Some(left);
                node.right = delete(Some(right), &successor, removed);
                node.key = successor;
            }
        },
    }
    Some(node)
}

/// The smallest key in the subtree rooted at `node`.
fn smallest<K>(mut node: &Node<K>) -> &K {
    while let Some(left) = node.left() {
        node = left;
    }
    &node.key
}
