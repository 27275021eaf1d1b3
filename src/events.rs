//! Change notifications for a [`Tree`][crate::Tree].
//!
//! Callbacks run synchronously, in registration order, once the structural change they
//! describe has completed.

use std::fmt;

/// The kind of structural change a callback is subscribed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    /// A value was inserted.
    Added,
    /// A value was removed.
    Removed,
}

/// Identifies a registered callback so it can be unsubscribed later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T, &str)>;

struct Listener<T> {
    id: SubscriptionId,
    change: Change,
    callback: Callback<T>,
}

/// The callbacks registered on one tree.
pub(crate) struct Observers<T> {
    next_id: u64,
    listeners: Vec<Listener<T>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> Observers<T> {
    pub(crate) fn subscribe(
        &mut self,
        change: Change,
        callback: impl FnMut(&T, &str) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            change,
            callback: Box::new(callback),
        });

        tracing::debug!(id = id.0, ?change, "subscribed");
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        let removed = self.listeners.len() != before;

        tracing::debug!(id = id.0, removed, "unsubscribed");
        removed
    }

    /// Fires every callback subscribed to `change`. A no-op with no subscribers.
    pub(crate) fn notify(&mut self, change: Change, value: &T, message: &str) {
        for listener in self
            .listeners
            .iter_mut()
            .filter(|listener| listener.change == change)
        {
            (listener.callback)(value, message);
        }
    }
}
