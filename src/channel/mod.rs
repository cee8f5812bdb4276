//! Store-backed message channels
//!
//! This module provides the named conduits producers and consumers meet
//! at. A channel owns no buffer of its own: every envelope passing
//! through it is held by a [`GroupStore`] group addressed by the key
//! `<store>:<channel>`, so channel contents survive as long as the store
//! does and are inspectable through the store API.
//!
//! # Architecture
//!
//! ```text
//!   Producer                          Consumer
//!      |                                ^
//!      | send / send_timeout /          | receive / try_receive
//!      | try_send                       |
//!      v                                |
//!   QueueChannel / PriorityChannel -----+
//!      |                ^
//!      | add_to_group   | poll_from_group
//!      v                |
//!   GroupStore group under key "<store>:<channel>"
//! ```
//!
//! # Channel Variants
//!
//! - [`QueueChannel`]: delivery order follows the backing store's group
//!   order, strict FIFO over a FIFO store
//! - [`PriorityChannel`]: same surface, but construction is refused
//!   unless the store is priority-capable, so receive order is always
//!   highest-priority-first
//! - [`TypedChannel`]: serde facade over a JSON string channel for
//!   strongly-typed payloads
//!
//! # Capacity and Blocking
//!
//! A capacity of zero means unbounded. Bounded channels track free slots
//! with a semaphore: senders park cooperatively until a slot frees or
//! their timeout expires, receivers park on a notifier until an envelope
//! arrives or the wait runs out. An empty channel is not an error; the
//! receive operations return `Ok(None)` when nothing arrives in time.
//!
//! [`GroupStore`]: crate::store::api::GroupStore
//! [`QueueChannel`]: crate::channel::api::QueueChannel
//! [`PriorityChannel`]: crate::channel::api::PriorityChannel
//! [`TypedChannel`]: crate::channel::api::TypedChannel

pub(crate) mod error;
pub(crate) mod internal;
pub(crate) mod priority;
pub(crate) mod queue;
pub(crate) mod traits;
pub(crate) mod typed;

pub mod api;

#[cfg(test)]
mod tests;
