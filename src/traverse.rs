//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! All traversals are driven by an explicit stack rather than recursion, so walking a
//! degenerate tree (one that has decayed into a linked list) uses heap memory proportional to
//! its height instead of call stack.

use std::iter::FusedIterator;

use crate::node::{self, Link, Node};

/// The order in which a traversal visits each node relative to its subtrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree. Yields values in comparator order.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A pending step of a traversal.
enum Visit<'a, T> {
    /// Expand this node's subtree according to the traversal order.
    Expand(&'a Node<T>),
    /// Yield this node's value.
    Yield(&'a Node<T>),
}

/// A borrowing iterator over the values of a tree in a given [`TraversalOrder`].
///
/// Created by [`Tree::traverse`][crate::Tree::traverse] and [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    order: TraversalOrder,
    stack: Vec<Visit<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: root.as_deref().map(Visit::Expand).into_iter().collect(),
            remaining: len,
        }
    }

    /// Pushes the steps for `node` so they pop off in `self.order`.
    fn expand(&mut self, node: &'a Node<T>) {
        let left = node.left.as_deref().map(Visit::Expand);
        let right = node.right.as_deref().map(Visit::Expand);

        // Pushed in reverse of the visiting order.
        match self.order {
            TraversalOrder::InOrder => {
                self.stack.extend(right);
                self.stack.push(Visit::Yield(node));
                self.stack.extend(left);
            }
            TraversalOrder::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Visit::Yield(node));
            }
            TraversalOrder::PostOrder => {
                self.stack.push(Visit::Yield(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Yield(node) => {
                    self.remaining -= 1;
                    return Some(&node.data);
                }
                Visit::Expand(node) => self.expand(node),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A consuming, in-order iterator over the values of a tree.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree]. Consuming a tree this way does
/// not fire removal notifications.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has already been pushed. Their right subtree is still attached.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        node::release(self.stack.drain(..));
    }
}
