//! Handler trait seam

use crate::dispatch::error::DispatchResult;
use crate::message::envelope::Envelope;
use async_trait::async_trait;

/// Application-side processing of dispatched envelopes
///
/// Implementations receive each envelope exactly once per dispatch; a
/// returned error is recorded against the dispatcher's failure counter
/// and the envelope is not redelivered.
#[async_trait]
pub trait MessageHandler<T>: Send + Sync {
    /// Process one envelope
    async fn handle(&self, envelope: Envelope<T>) -> DispatchResult<()>;
}
