//! Envelope implementation with identity and ordering metadata

use crate::channel::traits::MessageChannel;
use crate::message::error::{MessageError, MessageResult};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::SystemTime;

/// Process-wide allocator for envelope identity
static NEXT_ENVELOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a single envelope
///
/// Generated when the envelope is constructed and never reused within a
/// process. Distinct from the correlation id, which links multiple
/// envelopes together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvelopeId(u64);

impl EnvelopeId {
    fn next() -> Self {
        EnvelopeId(NEXT_ENVELOPE_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Raw numeric value of this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EnvelopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable unit of data moving through a channel
///
/// An envelope carries an opaque payload plus the metadata the buffering
/// layer orders and routes by. All fields are fixed at construction; the
/// accessors expose them read-only.
///
/// # Example
///
/// ```rust
/// use storeq::message::api::Envelope;
///
/// let envelope = Envelope::builder("part one".to_string())
///     .correlation_id("upload-7")
///     .sequence(1, 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(envelope.payload(), "part one");
/// assert_eq!(envelope.sequence_size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    id: EnvelopeId,
    payload: T,
    correlation_id: Option<String>,
    sequence_number: u32,
    sequence_size: u32,
    priority: Option<i32>,
    reply_to: Option<Weak<dyn MessageChannel<T>>>,
    timestamp: SystemTime,
}

impl<T> Envelope<T> {
    /// Create a plain envelope with no correlation, sequencing or priority
    pub fn new(payload: T) -> Self {
        Self {
            id: EnvelopeId::next(),
            payload,
            correlation_id: None,
            sequence_number: 0,
            sequence_size: 0,
            priority: None,
            reply_to: None,
            timestamp: SystemTime::now(),
        }
    }

    /// Start building an envelope with metadata attached
    pub fn builder(payload: T) -> EnvelopeBuilder<T> {
        EnvelopeBuilder {
            payload,
            correlation_id: None,
            sequence_number: 0,
            sequence_size: 0,
            priority: None,
            reply_to: None,
        }
    }

    /// Unique generated id of this envelope
    pub fn id(&self) -> EnvelopeId {
        self.id
    }

    /// Borrow the payload
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the envelope, yielding the payload
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Correlation id linking related envelopes, if any
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Position within the correlated group (0 when unsequenced)
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Size of the correlated group (0 when unsequenced)
    pub fn sequence_size(&self) -> u32 {
        self.sequence_size
    }

    /// Priority value consulted by priority-capable stores
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// Destination for replies, if the channel is still alive
    ///
    /// The envelope holds only a weak reference; once the channel has been
    /// dropped this returns `None`.
    pub fn reply_to(&self) -> Option<Arc<dyn MessageChannel<T>>> {
        self.reply_to.as_ref().and_then(Weak::upgrade)
    }

    /// Creation time of this envelope
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// Builder for envelopes carrying metadata
///
/// `build()` validates the sequence invariant: when a sequence size is
/// given, the sequence number must not exceed it.
pub struct EnvelopeBuilder<T> {
    payload: T,
    correlation_id: Option<String>,
    sequence_number: u32,
    sequence_size: u32,
    priority: Option<i32>,
    reply_to: Option<Weak<dyn MessageChannel<T>>>,
}

impl<T> EnvelopeBuilder<T> {
    /// Set the correlation id linking this envelope to related ones
    pub fn correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Set the position and size within a correlated group
    pub fn sequence(mut self, number: u32, size: u32) -> Self {
        self.sequence_number = number;
        self.sequence_size = size;
        self
    }

    /// Set the priority; higher values dequeue first on priority channels
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the reply destination; the envelope keeps a weak reference only
    pub fn reply_to(mut self, channel: &Arc<dyn MessageChannel<T>>) -> Self {
        self.reply_to = Some(Arc::downgrade(channel));
        self
    }

    /// Validate the metadata and construct the envelope
    pub fn build(self) -> MessageResult<Envelope<T>> {
        if self.sequence_size > 0 && self.sequence_number > self.sequence_size {
            return Err(MessageError::InvalidSequence {
                number: self.sequence_number,
                size: self.sequence_size,
            });
        }

        Ok(Envelope {
            id: EnvelopeId::next(),
            payload: self.payload,
            correlation_id: self.correlation_id,
            sequence_number: self.sequence_number,
            sequence_size: self.sequence_size,
            priority: self.priority,
            reply_to: self.reply_to,
            timestamp: SystemTime::now(),
        })
    }
}
