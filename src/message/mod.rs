//! Message Envelope Types
//!
//! This module defines the immutable unit of data that moves through the
//! buffering layer. An envelope pairs an opaque payload with identity and
//! ordering metadata:
//!
//! - **Identity**: every envelope gets a unique generated id, distinct from
//!   the correlation id that links related envelopes together
//! - **Sequencing**: `sequence_number` / `sequence_size` describe a position
//!   within a correlated group (e.g. parts of a split message)
//! - **Priority**: optional integer consulted by priority-capable stores;
//!   higher values dequeue first
//! - **Reply routing**: an optional weak reference to a destination channel,
//!   never owning the channel itself
//!
//! Envelopes are immutable once constructed. Plain envelopes come from
//! [`Envelope::new`]; metadata is attached through the builder, which
//! validates the sequence invariant at `build()` time.
//!
//! [`Envelope::new`]: api::Envelope::new

// Internal modules - all access should go through the api module
pub(crate) mod envelope;
pub(crate) mod error;

// Public API module
pub mod api;
