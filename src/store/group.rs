//! Group snapshot type returned by store reads

use crate::message::envelope::Envelope;
use std::time::SystemTime;

/// Immutable snapshot of one message group
///
/// Captures the group's members and metadata at the moment of the read;
/// later store mutations do not show through. Unknown keys produce an
/// empty snapshot with no metadata, so absence reads the same as an
/// emptied group.
#[derive(Debug, Clone)]
pub struct MessageGroup<T> {
    group_key: String,
    envelopes: Vec<Envelope<T>>,
    created_at: Option<SystemTime>,
    last_modified: Option<SystemTime>,
}

impl<T> MessageGroup<T> {
    /// Snapshot of a live group
    pub(crate) fn snapshot(
        group_key: &str,
        envelopes: Vec<Envelope<T>>,
        created_at: SystemTime,
        last_modified: SystemTime,
    ) -> Self {
        Self {
            group_key: group_key.to_string(),
            envelopes,
            created_at: Some(created_at),
            last_modified: Some(last_modified),
        }
    }

    /// Placeholder for a key the store has never seen
    pub(crate) fn empty(group_key: &str) -> Self {
        Self {
            group_key: group_key.to_string(),
            envelopes: Vec::new(),
            created_at: None,
            last_modified: None,
        }
    }

    /// Composite key addressing this group
    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    /// Members in store order: insertion order for FIFO groups, priority
    /// order for priority groups
    pub fn envelopes(&self) -> &[Envelope<T>] {
        &self.envelopes
    }

    /// Number of members at snapshot time
    pub fn size(&self) -> usize {
        self.envelopes.len()
    }

    /// Whether the group held no envelopes at snapshot time
    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }

    /// The envelope a poll would have returned, without removing it
    pub fn peek(&self) -> Option<&Envelope<T>> {
        self.envelopes.first()
    }

    /// When the group was created; `None` for unknown keys
    pub fn created_at(&self) -> Option<SystemTime> {
        self.created_at
    }

    /// When the group last changed; `None` for unknown keys
    pub fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }
}
