//! This crate exposes an unbalanced, comparator driven Binary Search Tree (BST) that tells its
//! subscribers whenever a value is added or removed.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants kept
//! by this crate's [`Tree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    that compares less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    that compares greater than or equal to its own value. Inserting a value
//!    equal to one already in the tree places it to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does
//! not rebalance itself, so inserting already sorted values produces a tree
//! whose height is its length. BSTs naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree
//! (see [`TraversalOrder`]).
//!
//! ## Ordering
//!
//! [`Tree::new`] orders values by their [`Ord`] implementation. Any other
//! ordering can be supplied with [`Tree::with_comparator`], see [`compare`].
//!
//! ## Notifications
//!
//! Callbacks registered with [`Tree::on_added`] and [`Tree::on_removed`] are
//! run synchronously after the tree has finished changing.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use observed_bst::Tree;
//!
//! let removed = Rc::new(RefCell::new(Vec::new()));
//! let mut tree: Tree<&str> = ["b", "a", "c"].into_iter().collect();
//!
//! let log = Rc::clone(&removed);
//! tree.on_removed(move |value, _message| log.borrow_mut().push(*value));
//!
//! assert!(tree.remove(&"b"));
//! assert!(!tree.remove(&"z"));
//! assert_eq!(*removed.borrow(), ["b"]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
pub mod events;
mod node;
pub mod traverse;
mod tree;


pub use compare::{Compare, Natural};
pub use error::TreeError;
pub use events::{Change, SubscriptionId};
pub use traverse::{IntoIter, Iter, TraversalOrder};
pub use tree::Tree;

/// The result of a fallible [`Tree`] query.
pub type Result<T> = std::result::Result<T, TreeError>;
