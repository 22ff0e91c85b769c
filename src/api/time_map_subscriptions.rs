use crate::core::{LinearScale, TimeGrad};

use super::{SubscriptionId, TimeMapEngine};

impl TimeMapEngine {
    /// Subscribes to scale changes.
    ///
    /// `callback` is invoked right away with the current scale, then once per
    /// published scale.
    pub fn scale_changes(
        &mut self,
        mut callback: impl FnMut(LinearScale) + 'static,
    ) -> SubscriptionId {
        self.scale.subscribe(move |scale: &LinearScale| callback(*scale))
    }

    /// Subscribes to grad list changes with the same replay semantics as
    /// [`TimeMapEngine::scale_changes`].
    pub fn grad_changes(
        &mut self,
        mut callback: impl FnMut(&[TimeGrad]) + 'static,
    ) -> SubscriptionId {
        self.grads
            .subscribe(move |grads: &Vec<TimeGrad>| callback(grads.as_slice()))
    }

    pub fn unsubscribe_scale(&mut self, id: SubscriptionId) -> bool {
        self.scale.unsubscribe(id)
    }

    pub fn unsubscribe_grads(&mut self, id: SubscriptionId) -> bool {
        self.grads.unsubscribe(id)
    }

    #[must_use]
    pub fn subscriber_counts(&self) -> (usize, usize) {
        (self.scale.subscriber_count(), self.grads.subscriber_count())
    }
}
