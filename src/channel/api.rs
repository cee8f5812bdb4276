//! Public API for the channel module
//!
//! External code should use these re-exports rather than reaching into
//! the implementation modules directly.

pub use crate::channel::error::{ChannelError, ChannelResult};
pub use crate::channel::priority::PriorityChannel;
pub use crate::channel::queue::QueueChannel;
pub use crate::channel::traits::{MessageChannel, PollableChannel};
pub use crate::channel::typed::{TypedChannel, TypedEnvelope};
