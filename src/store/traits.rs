//! Traits for the group store
//!
//! The [`GroupStore`] trait is the seam between the channel layer and
//! whatever holds the envelopes. Channels only ever talk to
//! `Arc<dyn GroupStore<T>>`, so an alternative backend slots in without
//! touching the channel code.

use crate::message::envelope::{Envelope, EnvelopeId};
use crate::store::error::StoreResult;
use crate::store::group::MessageGroup;
use crate::store::StoreStats;
use std::time::Duration;

/// Keyed storage of ordered envelope groups
///
/// Group keys follow the convention `<store name>:<channel name>`; the
/// store never interprets them beyond equality. Groups are created lazily
/// on first insert, and every read of an unknown key reports emptiness
/// rather than failure.
///
/// Implementations must linearise concurrent mutations on the same key
/// and must not let traffic on one key block traffic on another.
pub trait GroupStore<T>: Send + Sync {
    /// Store identifier, used as the group-key prefix
    fn name(&self) -> &str;

    /// Whether groups order by envelope priority instead of arrival order
    ///
    /// Priority channels check this flag at construction; wiring one to a
    /// store that preserves insertion order is a configuration error.
    fn priority_enabled(&self) -> bool;

    /// Append an envelope to a group, creating the group if absent
    ///
    /// FIFO stores append at the tail; priority-capable stores insert at
    /// the priority-sorted position (stable within equal priorities).
    fn add_to_group(&self, group_key: &str, envelope: Envelope<T>) -> StoreResult<()>;

    /// Snapshot of a group's members and metadata
    ///
    /// Unknown keys yield an empty group object with no side effects.
    fn message_group(&self, group_key: &str) -> StoreResult<MessageGroup<T>>;

    /// Atomically remove and return the head envelope of a group
    ///
    /// `None` when the group is empty or unknown. This is the channel
    /// receive path: the head is the oldest envelope for FIFO groups and
    /// the highest-priority one for priority groups.
    fn poll_from_group(&self, group_key: &str) -> StoreResult<Option<Envelope<T>>>;

    /// Remove one envelope from a group by id
    ///
    /// Returns the removed envelope, or `None` when the group or the
    /// envelope is absent (a silent no-op, not an error).
    fn remove_from_group(
        &self,
        group_key: &str,
        envelope_id: EnvelopeId,
    ) -> StoreResult<Option<Envelope<T>>>;

    /// Number of envelopes in a group; 0 for unknown keys
    fn group_size(&self, group_key: &str) -> StoreResult<usize>;

    /// Drop an entire group, returning how many envelopes were discarded
    fn remove_group(&self, group_key: &str) -> StoreResult<usize>;

    /// Keys of all groups currently held, empty ones included
    fn group_keys(&self) -> StoreResult<Vec<String>>;

    /// Number of groups currently held
    fn group_count(&self) -> StoreResult<usize>;

    /// Total number of envelopes across all groups
    fn message_count(&self) -> StoreResult<usize>;

    /// Remove groups that are empty and idle longer than the cutoff
    ///
    /// Returns the number of groups removed. Groups still holding
    /// envelopes are never expired; discarding content is the caller's
    /// explicit decision via [`remove_group`].
    ///
    /// [`remove_group`]: GroupStore::remove_group
    fn expire_idle_groups(&self, idle_for: Duration) -> StoreResult<usize>;

    /// Aggregate statistics for this store
    fn stats(&self) -> StoreResult<StoreStats>;
}
