use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle returned by a subscription, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Replay-latest notification stream.
///
/// The stream always holds a value. New subscribers are called with it
/// immediately, then with every published value in FIFO order.
pub struct ChangeStream<T> {
    name: &'static str,
    latest: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> ChangeStream<T> {
    #[must_use]
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            latest: initial,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn latest(&self) -> &T {
        &self.latest
    }

    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        callback(&self.latest);
        self.subscribers.push((id, Box::new(callback)));
        trace!(stream = self.name, subscribers = self.subscribers.len(), "subscribe");
        id
    }

    /// Removes a subscriber. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(entry, _)| *entry != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self, value: T) {
        self.latest = value;
        trace!(stream = self.name, subscribers = self.subscribers.len(), "publish");
        for (_, callback) in &mut self.subscribers {
            callback(&self.latest);
        }
    }
}
