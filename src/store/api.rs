//! Public API for the group store
//!
//! This module provides the complete public API for the message group
//! store. External modules should import from here rather than directly
//! from internal modules.

// Store implementations
pub use crate::store::memory::MemoryGroupStore;

// Group snapshots
pub use crate::store::group::MessageGroup;

// Error handling
pub use crate::store::error::{StoreError, StoreResult};

// Traits
pub use crate::store::traits::GroupStore;

// Statistics
pub use crate::store::StoreStats;
