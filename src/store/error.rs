//! Store Error Types
//!
//! Absence is never an error here: unknown group keys answer with empty
//! snapshots, zero sizes or `None`. The error type covers genuine
//! failures only, such as poisoned locks or a failing backend.

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store operation failed: {message}")]
    OperationFailed { message: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
