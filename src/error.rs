use thiserror::Error;

/// Errors returned by [`Tree`][crate::Tree] queries.
///
/// Removing a value that isn't in the tree is not an error; [`Tree::remove`][crate::Tree::remove]
/// reports it by returning `false`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The query needs at least one element but the tree has none.
    #[error("tree is empty")]
    Empty,
}
