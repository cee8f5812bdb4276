//! Error types for dispatch operations

use crate::channel::error::ChannelError;

/// Errors that can occur during dispatch
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The handler rejected or failed to process an envelope
    #[error("Handler failed: {message}")]
    Handler { message: String },

    /// The input channel failed underneath the dispatcher
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;
