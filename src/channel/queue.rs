//! FIFO queue channel

use crate::channel::error::ChannelResult;
use crate::channel::internal::StoreBackedChannel;
use crate::channel::traits::{MessageChannel, PollableChannel};
use crate::message::envelope::Envelope;
use crate::store::traits::GroupStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Point-to-point channel buffering envelopes in a store group
///
/// Delivery order follows the backing store's group order: over a FIFO
/// store this is strict insertion order. Cloneless hand-off, each
/// envelope is received by exactly one consumer.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use storeq::channel::api::{MessageChannel, PollableChannel, QueueChannel};
/// use storeq::message::api::Envelope;
/// use storeq::store::api::MemoryGroupStore;
///
/// # async fn example() -> storeq::channel::api::ChannelResult<()> {
/// let store = Arc::new(MemoryGroupStore::new("messages".to_string()));
/// let channel = QueueChannel::new("input".to_string(), store);
///
/// channel.send(Envelope::new("hello".to_string())).await?;
///
/// let received = channel.receive(Duration::from_millis(100)).await?;
/// assert!(received.is_some());
/// # Ok(())
/// # }
/// ```
pub struct QueueChannel<T> {
    inner: StoreBackedChannel<T>,
}

impl<T: Send + 'static> QueueChannel<T> {
    /// Create an unbounded channel over the given store
    pub fn new(name: String, store: Arc<dyn GroupStore<T>>) -> Self {
        Self::with_capacity(name, store, 0)
    }

    /// Create a channel holding at most `capacity` envelopes
    ///
    /// A capacity of zero means unbounded.
    pub fn with_capacity(name: String, store: Arc<dyn GroupStore<T>>, capacity: usize) -> Self {
        Self {
            inner: StoreBackedChannel::new(name, store, capacity),
        }
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
impl<T: Send + 'static> MessageChannel<T> for QueueChannel<T> {
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
impl<T: Send + 'static> PollableChannel<T> for QueueChannel<T> {
    async fn receive(&self, wait: Duration) -> ChannelResult<Option<Envelope<T>>> {
        self.inner.receive(wait).await
    }

    fn try_receive(&self) -> ChannelResult<Option<Envelope<T>>> {
        self.inner.try_receive()
    }
}
