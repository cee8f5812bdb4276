//! Error types for channel operations

use crate::store::error::StoreError;

/// Errors that can occur during channel operations
///
/// [`Full`] is recoverable: the caller may retry, drop the envelope or
/// route it elsewhere. [`Configuration`] indicates a wiring mistake and
/// is raised at construction time, never mid-traffic. An empty channel
/// is not represented here at all; receive operations express absence
/// as `Ok(None)`.
///
/// [`Full`]: ChannelError::Full
/// [`Configuration`]: ChannelError::Configuration
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The channel is at capacity and no slot freed within the wait
    #[error("Channel full: capacity {capacity} reached")]
    Full { capacity: usize },

    /// The channel was wired against an incompatible store
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A typed payload could not be serialized
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// A typed payload could not be deserialized
    #[error("Deserialization failed: {message}")]
    Deserialization { message: String },

    /// A channel-internal operation failed
    #[error("Channel operation failed: {message}")]
    OperationFailed { message: String },

    /// The backing store reported a failure, passed through unchanged
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;
