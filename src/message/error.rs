//! Message Error Types

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Invalid sequence: number {number} exceeds size {size}")]
    InvalidSequence { number: u32, size: u32 },
}

/// Result type for envelope construction
pub type MessageResult<T> = Result<T, MessageError>;
