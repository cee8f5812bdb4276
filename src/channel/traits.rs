//! Channel trait seams
//!
//! [`MessageChannel`] is the send-side contract; [`PollableChannel`]
//! extends it with the receive side. Both are object-safe so channels
//! can be passed around as `Arc<dyn PollableChannel<T>>` and referenced
//! weakly from envelope reply-to fields.

use crate::channel::error::ChannelResult;
use crate::message::envelope::Envelope;
use async_trait::async_trait;
use std::time::Duration;

/// Send side of a channel
#[async_trait]
pub trait MessageChannel<T>: Send + Sync {
    /// The channel's logical name
    fn name(&self) -> &str;

    /// Send an envelope, waiting indefinitely for a capacity slot on a
    /// bounded channel
    async fn send(&self, envelope: Envelope<T>) -> ChannelResult<()>;

    /// Send an envelope, waiting up to `wait` for a capacity slot
    ///
    /// Fails with [`ChannelError::Full`] when the channel is still at
    /// capacity at expiry. A zero wait never suspends.
    ///
    /// [`ChannelError::Full`]: crate::channel::error::ChannelError::Full
    async fn send_timeout(&self, envelope: Envelope<T>, wait: Duration) -> ChannelResult<()>;

    /// Send an envelope without waiting; fails immediately when full
    fn try_send(&self, envelope: Envelope<T>) -> ChannelResult<()>;
}

/// Receive side of a channel
#[async_trait]
pub trait PollableChannel<T>: MessageChannel<T> {
    /// Remove and return the head envelope, waiting up to `wait` for
    /// one to arrive
    ///
    /// Returns `Ok(None)` when nothing arrived within the wait; an
    /// empty channel is not an error. A zero wait polls and returns
    /// immediately.
    async fn receive(&self, wait: Duration) -> ChannelResult<Option<Envelope<T>>>;

    /// Remove and return the head envelope without waiting
    fn try_receive(&self) -> ChannelResult<Option<Envelope<T>>>;
}
