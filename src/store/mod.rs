//! Message Group Store Component
//!
//! Keyed storage of envelope groups backing the channel layer. Every
//! channel buffers its envelopes in one group, addressed by the composite
//! key `<store>:<channel>`, so multiple stores can share a process without
//! colliding.
//!
//! # Overview
//!
//! - **Lazy groups**: a group springs into existence on first insert;
//!   reading an unknown key yields an empty snapshot, never an error
//! - **Two orderings**: FIFO stores preserve strict insertion order;
//!   priority-capable stores keep each group sorted by envelope priority
//!   (highest first, stable within equal priorities)
//! - **Per-group locking**: the key map is shared read-mostly while each
//!   group serialises its own mutations, so traffic on different keys
//!   never contends
//! - **Immediate visibility**: every mutation is visible to subsequent
//!   reads from any thread; there is no write buffering
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │            MemoryGroupStore ("messages")           │
//! │                                                    │
//! │  "messages:input"  ──► ┌───┬───┬───┬───┐  (FIFO)   │
//! │                        │ 1 │ 2 │ 3 │ 4 │           │
//! │                        └───┴───┴───┴───┘           │
//! │  "messages:output" ──► ┌───┬───┐                   │
//! │                        │ 5 │ 6 │                   │
//! │                        └───┴───┘                   │
//! └────────────────────────────────────────────────────┘
//!          ▲ add_to_group          │ poll_from_group
//!          │                       ▼
//!      channel send            channel receive
//! ```
//!
//! The capability split between FIFO and priority stores is decided at
//! construction: [`MemoryGroupStore::new`] builds a FIFO store,
//! [`MemoryGroupStore::with_priority`] the priority-capable variant, and
//! [`GroupStore::priority_enabled`] reports which one a channel was wired
//! to.
//!
//! [`MemoryGroupStore::new`]: api::MemoryGroupStore::new
//! [`MemoryGroupStore::with_priority`]: api::MemoryGroupStore::with_priority
//! [`GroupStore::priority_enabled`]: api::GroupStore::priority_enabled

// Internal modules - all access should go through the api module
pub(crate) mod error;
pub(crate) mod group;
pub(crate) mod memory;
pub(crate) mod traits;

// Public API module
pub mod api;

/// Aggregate statistics for a group store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of groups currently held, empty ones included
    pub total_groups: usize,
    /// Total number of buffered envelopes across all groups
    pub total_messages: usize,
    /// Number of groups that currently hold no envelopes
    pub empty_groups: usize,
}

#[cfg(test)]
mod tests;
