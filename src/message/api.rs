//! Public API for message envelopes
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::message::envelope::{Envelope, EnvelopeBuilder, EnvelopeId};
pub use crate::message::error::{MessageError, MessageResult};
