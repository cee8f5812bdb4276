//! Envelope dispatch from channels to handlers
//!
//! This module connects the polling side of a channel to application
//! code. A [`Dispatcher`] owns a background task that repeatedly
//! receives from its input channel and hands each envelope to a
//! [`MessageHandler`].
//!
//! # Delivery Contract
//!
//! Hand-off is at-most-once: the receive removes the envelope from the
//! input group before the handler runs, and a failing handler gets no
//! retry. Failures are logged and counted, never re-queued. Callers who
//! need redelivery keep their own copy or re-send from the handler.
//!
//! # Lifecycle
//!
//! ```text
//!   Dispatcher::start() --> polling task --> handler.handle(envelope)
//!         |                     ^
//!         v                     | poll timeout per iteration
//!   DispatcherHandle::stop() ---+--> resolves to DispatchStats
//! ```
//!
//! Shutdown is cooperative: `stop` signals the task, which observes the
//! signal no later than its next poll-timeout expiry and resolves with
//! the delivery counters.
//!
//! [`Dispatcher`]: crate::dispatch::api::Dispatcher
//! [`MessageHandler`]: crate::dispatch::api::MessageHandler

pub(crate) mod dispatcher;
pub(crate) mod error;
pub(crate) mod traits;

pub mod api;

#[cfg(test)]
mod tests;

/// Delivery counters reported by a stopped dispatcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Envelopes handed to the handler that returned success
    pub delivered: u64,

    /// Envelopes whose handler returned an error
    pub failed: u64,
}
