//! A mutable, comparator driven BST that notifies subscribers when values are added or removed.
//!
//! The tree never rebalances. Its shape depends only on insertion order, so inserting sorted
//! input builds a tree whose height equals its length. All walks over the tree (searches,
//! traversals and dropping it) are iterative so such a tree is slow but never overflows the
//! stack.
//!
//! # Examples
//!
//! ```
//! use observed_bst::{Tree, TraversalOrder};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8] {
//!     tree.insert(x);
//! }
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.min(), Ok(&3));
//! assert_eq!(tree.max(), Ok(&8));
//!
//! let pre_order: Vec<_> = tree.traverse(TraversalOrder::PreOrder).collect();
//! assert_eq!(pre_order, [&5, &3, &8]);
//!
//! // Removing reports whether anything was found.
//! assert!(tree.remove(&5));
//! assert!(!tree.remove(&5));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::events::{Change, Observers, SubscriptionId};
use crate::node::{self, Link, Node};
use crate::traverse::{IntoIter, Iter, TraversalOrder};
use crate::{Result, TreeError};

/// A Binary Search Tree over values of `T` ordered by the comparator `C`.
///
/// Every value in a node's left subtree compares less than the node's value and every value in
/// its right subtree compares greater than or equal to it. Values comparing equal to an existing
/// value are therefore stored to its right.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    count: usize,
    comparator: C,
    observers: Observers<T>,
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Generates a new, empty `Tree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use observed_bst::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 3, 2]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert_eq!(tree.min(), Ok(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            count: 0,
            comparator,
            observers: Observers::default(),
        }
    }

    /// Inserts `item` into the tree. Items comparing equal to a stored value are kept alongside
    /// it (to its right) rather than replacing it.
    ///
    /// Fires the "added" callbacks once the item is in place.
    pub fn insert(&mut self, item: T) {
        let Self {
            root,
            count,
            comparator,
            observers,
        } = self;

        let is_root = root.is_none();
        let slot = vacant_slot(root, comparator, &item);
        let node = slot.insert(Box::new(Node::new(item)));
        *count += 1;

        let message = if is_root {
            "inserted as the root"
        } else {
            "inserted"
        };
        tracing::trace!(count = *count, root = is_root, "{message}");
        observers.notify(Change::Added, &node.data, message);
    }

    /// Removes a value comparing equal to `item` and reports whether one was found. When several
    /// stored values compare equal, the one closest to the root is removed.
    ///
    /// Fires the "removed" callbacks after a successful removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use observed_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert!(!tree.remove(&42));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Like [`remove`][Tree::remove] but hands back the removed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use observed_bst::Tree;
    ///
    /// // Only the first field takes part in the ordering.
    /// let mut tree = Tree::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// tree.insert((1, 'a'));
    ///
    /// assert_eq!(tree.take(&(1, '?')), Some((1, 'a')));
    /// assert_eq!(tree.take(&(1, '?')), None);
    /// ```
    pub fn take(&mut self, item: &T) -> Option<T> {
        let slot = matching_slot(&mut self.root, &self.comparator, item)?;
        let removed = unlink(slot)?;
        self.count -= 1;

        tracing::trace!(count = self.count, "removed");
        self.observers.notify(Change::Removed, &removed, "removed");
        Some(removed)
    }

    /// Returns whether a value comparing equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.get(item).is_some()
    }

    /// Returns the stored value comparing equal to `item`, if there is one. With duplicates, this
    /// is the one closest to the root.
    pub fn get(&self, item: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.comparator.compare(&node.data, item) {
                Ordering::Less => &node.right,
                Ordering::Greater => &node.left,
                Ordering::Equal => return Some(&node.data),
            };
        }

        None
    }
}

impl<T, C> Tree<T, C> {
    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no values.
    pub fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok(&node.data)
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no values.
    pub fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok(&node.data)
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Lazily visits every value in the given order. Each call starts a fresh traversal.
    pub fn traverse(&self, order: TraversalOrder) -> Iter<'_, T> {
        Iter::new(&self.root, self.count, order)
    }

    /// Visits every value in comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Registers `callback` to run after every insertion with the inserted value and a short
    /// description of the change.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use observed_bst::Tree;
    ///
    /// let added = Rc::new(RefCell::new(Vec::new()));
    /// let mut tree = Tree::new();
    ///
    /// let seen = Rc::clone(&added);
    /// let id = tree.on_added(move |v: &i32, _message: &str| seen.borrow_mut().push(*v));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert!(tree.unsubscribe(id));
    /// tree.insert(3);
    ///
    /// assert_eq!(*added.borrow(), [2, 1]);
    /// ```
    pub fn on_added(&mut self, callback: impl FnMut(&T, &str) + 'static) -> SubscriptionId {
        self.observers.subscribe(Change::Added, callback)
    }

    /// Registers `callback` to run after every successful removal with the removed value and a
    /// short description of the change.
    pub fn on_removed(&mut self, callback: impl FnMut(&T, &str) + 'static) -> SubscriptionId {
        self.observers.subscribe(Change::Removed, callback)
    }

    /// Stops the callback registered under `id`. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

/// Finds the empty slot `item` belongs in. Ties go right.
fn vacant_slot<'a, T, C>(mut slot: &'a mut Link<T>, comparator: &C, item: &T) -> &'a mut Link<T>
where
    C: Compare<T>,
{
    while let Some(node) = slot {
        slot = match comparator.compare(&node.data, item) {
            Ordering::Greater => &mut node.left,
            Ordering::Less | Ordering::Equal => &mut node.right,
        };
    }

    slot
}

/// Finds the slot holding the highest node comparing equal to `item`.
///
/// Returning the slot itself (rather than the parent) means removal never has to work out which
/// side of the parent the match hangs off.
fn matching_slot<'a, T, C>(
    mut slot: &'a mut Link<T>,
    comparator: &C,
    item: &T,
) -> Option<&'a mut Link<T>>
where
    C: Compare<T>,
{
    loop {
        let ordering = comparator.compare(&slot.as_ref()?.data, item);
        slot = match ordering {
            Ordering::Less => &mut slot.as_mut()?.right,
            Ordering::Greater => &mut slot.as_mut()?.left,
            Ordering::Equal => return Some(slot),
        };
    }
}

/// Removes the node in `slot`, fills the slot with whatever should replace it and returns the
/// removed value.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let mut node = slot.take()?;
    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (None, Some(right)) => Some(right),
        (Some(left), None) => Some(left),

        // With two children the in-order successor (the smallest value in the right subtree)
        // takes this node's place.
        (Some(left), Some(mut right)) => match right.take_leftmost() {
            Some(mut successor) => {
                successor.left = Some(left);
                successor.right = Some(right);
                Some(successor)
            }
            // The right child has no left child so it is the successor.
            None => {
                right.left = Some(left);
                Some(right)
            }
        },
    };

    Some(node.data)
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

/// Clones the values and the comparator. The clone has the same shape as the original but no
/// subscribers.
impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    fn clone(&self) -> Self {
        // Re-inserting parents before their children rebuilds the same shape.
        let mut tree = Self::with_comparator(self.comparator.clone());
        for value in self.traverse(TraversalOrder::PreOrder) {
            tree.insert(value.clone());
        }

        tree
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.count)
            .field("values", &DebugValues(self))
            .field("observers", &self.observers)
            .finish()
    }
}

struct DebugValues<'a, T, C>(&'a Tree<T, C>);

impl<T: fmt::Debug, C> fmt::Debug for DebugValues<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.count)
    }
}
