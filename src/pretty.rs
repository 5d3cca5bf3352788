//! Drawing the shape of a [`Tree`] for diagnostics.
//!
//! The tree is drawn on its side, the right subtree above a node and the left subtree below it.
//! `Tree::build(1..=7)` comes out as:
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    /// Writes one line per key. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_node<K>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right() {
        let rail = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{prefix}{rail}"), false)?;
    }
    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{branch}{}", node.key())?;
    if let Some(left) = node.left() {
        let rail = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{prefix}{rail}"), true)?;
    }
    Ok(())
}
