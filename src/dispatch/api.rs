//! Public API for the dispatch module
//!
//! External code should use these re-exports rather than reaching into
//! the implementation modules directly.

pub use crate::dispatch::dispatcher::{Dispatcher, DispatcherHandle};
pub use crate::dispatch::error::{DispatchError, DispatchResult};
pub use crate::dispatch::traits::MessageHandler;
pub use crate::dispatch::DispatchStats;
