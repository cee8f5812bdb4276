//! Typed channel facade for type-safe payload handling
//!
//! This module wraps a string channel whose payloads are JSON, so
//! callers work directly with strongly-typed values instead of
//! serializing and deserializing by hand at every call site.

use crate::channel::error::{ChannelError, ChannelResult};
use crate::channel::traits::PollableChannel;
use crate::message::envelope::Envelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// A typed facade over a JSON string channel
///
/// # Type Parameters
/// * `M` - The payload type carried through the channel (must implement
///   `Serialize` and `DeserializeOwned`)
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use serde::{Deserialize, Serialize};
/// use storeq::channel::api::{QueueChannel, TypedChannel};
/// use storeq::store::api::MemoryGroupStore;
///
/// #[derive(Serialize, Deserialize)]
/// struct OrderPlaced {
///     order_id: u64,
///     item: String,
/// }
///
/// # async fn example() -> storeq::channel::api::ChannelResult<()> {
/// let store = Arc::new(MemoryGroupStore::new("messages".to_string()));
/// let channel = Arc::new(QueueChannel::new("orders".to_string(), store));
/// let typed: TypedChannel<OrderPlaced> = TypedChannel::new(channel);
///
/// typed
///     .send(&OrderPlaced {
///         order_id: 17,
///         item: "widget".to_string(),
///     })
///     .await?;
///
/// if let Some(order) = typed.receive(Duration::from_millis(100)).await? {
///     println!("order {} for {}", order.order_id, order.item);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TypedChannel<M> {
    inner: Arc<dyn PollableChannel<String>>,
    _phantom: PhantomData<M>,
}

impl<M> TypedChannel<M>
where
    M: Serialize + DeserializeOwned + Send + Sync,
{
    /// Create a typed facade over a string channel
    pub fn new(inner: Arc<dyn PollableChannel<String>>) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Serialize a value into a fresh envelope and send it
    pub async fn send(&self, value: &M) -> ChannelResult<()> {
        let payload = self.serialize_value(value)?;
        self.inner.send(Envelope::new(payload)).await
    }

    /// Serialize and send without waiting for a capacity slot
    pub fn try_send(&self, value: &M) -> ChannelResult<()> {
        let payload = self.serialize_value(value)?;
        self.inner.try_send(Envelope::new(payload))
    }

    /// Receive a strongly-typed value
    ///
    /// Returns:
    /// - `Ok(Some(M))` - an envelope arrived and its payload deserialized
    /// - `Ok(None)` - nothing arrived within the wait
    /// - `Err(ChannelError)` - channel failure or malformed payload
    pub async fn receive(&self, wait: Duration) -> ChannelResult<Option<M>> {
        match self.inner.receive(wait).await? {
            Some(envelope) => Ok(Some(self.deserialize_payload(&envelope)?)),
            None => Ok(None),
        }
    }

    /// Receive a strongly-typed value without waiting
    pub fn try_receive(&self) -> ChannelResult<Option<M>> {
        match self.inner.try_receive()? {
            Some(envelope) => Ok(Some(self.deserialize_payload(&envelope)?)),
            None => Ok(None),
        }
    }

    /// Receive the decoded value together with its envelope metadata
    ///
    /// Use this when identity, correlation or sequencing information is
    /// needed alongside the typed content.
    pub async fn receive_with_envelope(
        &self,
        wait: Duration,
    ) -> ChannelResult<Option<TypedEnvelope<M>>> {
        match self.inner.receive(wait).await? {
            Some(envelope) => {
                let content = self.deserialize_payload(&envelope)?;
                Ok(Some(TypedEnvelope { content, envelope }))
            }
            None => Ok(None),
        }
    }

    /// Access the underlying channel for untyped operations
    pub fn inner(&self) -> &Arc<dyn PollableChannel<String>> {
        &self.inner
    }

    fn serialize_value(&self, value: &M) -> ChannelResult<String> {
        serde_json::to_string(value).map_err(|e| ChannelError::Serialization {
            message: format!(
                "Failed to serialize {} for channel '{}': {}",
                std::any::type_name::<M>(),
                self.inner.name(),
                e
            ),
        })
    }

    /// Deserialize an envelope payload to the target type
    fn deserialize_payload(&self, envelope: &Envelope<String>) -> ChannelResult<M> {
        let payload = envelope.payload();
        serde_json::from_str(payload).map_err(|e| {
            let payload_preview = if payload.len() > 100 {
                let truncated_bytes = &payload.as_bytes()[..100];
                format!("{}...", String::from_utf8_lossy(truncated_bytes))
            } else {
                payload.clone()
            };

            ChannelError::Deserialization {
                message: format!(
                    "Failed to deserialize envelope {} to {}: {} | channel: '{}', payload_length: {}, payload_preview: '{}'",
                    envelope.id(),
                    std::any::type_name::<M>(),
                    e,
                    self.inner.name(),
                    payload.len(),
                    payload_preview
                ),
            }
        })
    }
}

/// A decoded value paired with the envelope that carried it
#[derive(Debug)]
pub struct TypedEnvelope<M> {
    /// Strongly-typed payload content
    pub content: M,
    /// The raw envelope with identity and ordering metadata
    pub envelope: Envelope<String>,
}

impl<M> TypedEnvelope<M> {
    /// The carrying envelope's unique id
    pub fn id(&self) -> crate::message::envelope::EnvelopeId {
        self.envelope.id()
    }

    /// The correlation id linking related envelopes, if any
    pub fn correlation_id(&self) -> Option<&str> {
        self.envelope.correlation_id()
    }

    /// Position of this envelope within its correlation sequence
    pub fn sequence_number(&self) -> u32 {
        self.envelope.sequence_number()
    }

    /// Total size of the correlation sequence
    pub fn sequence_size(&self) -> u32 {
        self.envelope.sequence_size()
    }

    /// The envelope's priority, if one was assigned
    pub fn priority(&self) -> Option<i32> {
        self.envelope.priority()
    }

    /// When the carrying envelope was created
    pub fn timestamp(&self) -> std::time::SystemTime {
        self.envelope.timestamp()
    }
}
