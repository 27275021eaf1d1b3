/// An owning link to a child. `None` is an empty subtree; there are no sentinel nodes.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of the tree. Each `Node` exclusively owns its two children, so a subtree can
/// only ever be reachable from one slot.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `data`.
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Detaches the leftmost node of this node's *left* subtree and returns it. The detached
    /// node's right subtree is moved into the slot it vacated.
    ///
    /// Returns `None` when this node has no left child.
    pub(crate) fn take_leftmost(&mut self) -> Option<Box<Self>> {
        let mut slot = &mut self.left;
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }
}

/// Drops every node reachable from `links` without recursing, so a degenerate (list shaped)
/// tree can't overflow the stack when it is released.
pub(crate) fn release<T>(links: impl IntoIterator<Item = Box<Node<T>>>) {
    let mut stack: Vec<_> = links.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
