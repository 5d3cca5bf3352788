//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! Most "failures" of a BST are not errors at all: inserting a key that is
//! already present, deleting a key that isn't, or searching for a missing key
//! are all reported through ordinary return values (`bool` or `Option`). The
//! variants below cover the remaining cases where the caller asked for
//! something the tree cannot answer.

use thiserror::Error;

/// The ways a [`Tree`][crate::Tree] operation can be misused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A depth was requested for a key that is not stored in the tree.
    #[error("key is not present in the tree")]
    KeyNotFound,

    /// A traversal was started without a visitor to call for each key.
    #[error("a traversal requires a visitor")]
    MissingVisitor,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
