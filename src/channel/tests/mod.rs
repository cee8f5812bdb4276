//! Channel module tests
//!
//! Organized by functional area:
//! - `core_functionality`: send/receive round-trips and accessors
//! - `capacity`: bounded channel slot accounting
//! - `timeout`: zero-wait and bounded-wait semantics
//! - `priority`: priority delivery order and wiring checks
//! - `typed`: serde facade round-trips and failure reporting
//! - `concurrent`: producer/consumer interleavings and wakeups

mod core_functionality;
mod priority;
