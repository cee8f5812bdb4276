//! Priority-ordered channel

use crate::channel::error::{ChannelError, ChannelResult};
use crate::channel::internal::StoreBackedChannel;
use crate::channel::traits::{MessageChannel, PollableChannel};
use crate::message::envelope::Envelope;
use crate::store::traits::GroupStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Channel delivering the highest-priority envelope first
///
/// The ordering work happens in the backing store's group, so the store
/// must be priority-capable; wiring a plain FIFO store is a
/// configuration mistake and is rejected at construction rather than
/// surfacing as wrong delivery order later. Envelopes without a
/// priority rank below any explicit value, and equal priorities drain
/// in arrival order.
pub struct PriorityChannel<T> {
    inner: StoreBackedChannel<T>,
}

impl<T: Send + 'static> PriorityChannel<T> {
    /// Create an unbounded priority channel over a priority-capable store
    pub fn new(name: String, store: Arc<dyn GroupStore<T>>) -> ChannelResult<Self> {
        Self::with_capacity(name, store, 0)
    }

    /// Create a priority channel holding at most `capacity` envelopes
    ///
    /// A capacity of zero means unbounded. Fails with
    /// [`ChannelError::Configuration`] when the store preserves plain
    /// insertion order.
    pub fn with_capacity(
        name: String,
        store: Arc<dyn GroupStore<T>>,
        capacity: usize,
    ) -> ChannelResult<Self> {
        if !store.priority_enabled() {
            return Err(ChannelError::Configuration {
                message: format!(
                    "Channel '{}' requires a priority-capable store, but store '{}' preserves insertion order",
                    name,
                    store.name()
                ),
            });
        }

        Ok(Self {
            inner: StoreBackedChannel::new(name, store, capacity),
        })
    }

    /// Number of envelopes currently buffered
    pub fn len(&self) -> ChannelResult<usize> {
        self.inner.len()
    }

    /// Whether the channel currently buffers nothing
    pub fn is_empty(&self) -> ChannelResult<bool> {
        self.inner.is_empty()
    }

    /// Discard all buffered envelopes, returning how many were dropped
    pub fn clear(&self) -> ChannelResult<usize> {
        self.inner.clear()
    }

    /// Configured capacity; zero means unbounded
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// The store group key this channel buffers under
    pub fn group_key(&self) -> &str {
        self.inner.group_key()
    }

    /// The store instance this channel was wired to
    pub fn store(&self) -> &Arc<dyn GroupStore<T>> {
        self.inner.store()
    }
}

#[async_trait]
impl<T: Send + 'static> MessageChannel<T> for PriorityChannel<T> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn send(&self, envelope: Envelope<T>) -> ChannelResult<()> {
        self.inner.send(envelope).await
    }

    async fn send_timeout(&self, envelope: Envelope<T>, wait: Duration) -> ChannelResult<()> {
        self.inner.send_timeout(envelope, wait).await
    }

    fn try_send(&self, envelope: Envelope<T>) -> ChannelResult<()> {
        self.inner.try_send(envelope)
    }
}

#[async_trait]
impl<T: Send + 'static> PollableChannel<T> for PriorityChannel<T> {
    async fn receive(&self, wait: Duration) -> ChannelResult<Option<Envelope<T>>> {
        self.inner.receive(wait).await
    }

    fn try_receive(&self) -> ChannelResult<Option<Envelope<T>>> {
        self.inner.try_receive()
    }
}
