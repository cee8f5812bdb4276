//! In-memory GroupStore implementation
//!
//! This module provides the default store backend:
//! - Lazily created groups keyed by `<store>:<channel>` strings
//! - VecDeque-backed group buffers in insertion or priority order
//! - A read-mostly key map with one mutex per group, so different keys
//!   never block each other

use crate::core::sync::{lock_mutex, read_lock, write_lock};
use crate::message::envelope::{Envelope, EnvelopeId};
use crate::store::error::{StoreError, StoreResult};
use crate::store::group::MessageGroup;
use crate::store::traits::GroupStore;
use crate::store::StoreStats;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, SystemTime};

fn sync_error(message: String) -> StoreError {
    StoreError::OperationFailed { message }
}

/// Internal state of one group
#[derive(Debug)]
struct GroupState<T> {
    envelopes: VecDeque<Envelope<T>>,
    created_at: SystemTime,
    last_modified: SystemTime,
}

impl<T> GroupState<T> {
    fn new() -> Self {
        let now = SystemTime::now();
        Self {
            envelopes: VecDeque::new(),
            created_at: now,
            last_modified: now,
        }
    }
}

/// In-memory keyed storage of envelope groups
///
/// The ordering discipline is fixed at construction: [`new`] builds a
/// FIFO store, [`with_priority`] the priority-capable variant. Mutations
/// on the same group are linearised by that group's own lock; the outer
/// key map is only write-locked to create or remove groups.
///
/// # Example
///
/// ```rust
/// use storeq::message::api::Envelope;
/// use storeq::store::api::{GroupStore, MemoryGroupStore};
///
/// # fn example() -> storeq::store::api::StoreResult<()> {
/// let store = MemoryGroupStore::new("messages".to_string());
///
/// store.add_to_group("messages:input", Envelope::new("payload".to_string()))?;
/// assert_eq!(store.group_size("messages:input")?, 1);
///
/// let head = store.poll_from_group("messages:input")?;
/// assert!(head.is_some());
/// # Ok(())
/// # }
/// ```
///
/// [`new`]: MemoryGroupStore::new
/// [`with_priority`]: MemoryGroupStore::with_priority
#[derive(Debug)]
pub struct MemoryGroupStore<T> {
    /// Store identifier, used as the group-key prefix
    name: String,

    /// Whether groups order by envelope priority
    priority_enabled: bool,

    /// Group key to independently locked group state
    groups: RwLock<HashMap<String, Arc<Mutex<GroupState<T>>>>>,
}

impl<T> MemoryGroupStore<T> {
    /// Create a FIFO store: groups preserve strict insertion order
    pub fn new(name: String) -> Self {
        Self::with_ordering(name, false)
    }

    /// Create a priority-capable store
    ///
    /// Groups stay sorted by envelope priority, highest first; equal
    /// priorities keep their arrival order, and envelopes without a
    /// priority sort below any explicit value.
    pub fn with_priority(name: String) -> Self {
        Self::with_ordering(name, true)
    }

    fn with_ordering(name: String, priority_enabled: bool) -> Self {
        log::debug!(
            "Creating {} group store '{}'",
            if priority_enabled { "priority" } else { "FIFO" },
            name
        );
        Self {
            name,
            priority_enabled,
            groups: RwLock::new(HashMap::new()),
        }
    }

    /// Shared handle to an existing group, if any
    fn group_handle(&self, group_key: &str) -> StoreResult<Option<Arc<Mutex<GroupState<T>>>>> {
        let groups = read_lock(&self.groups, sync_error)?;
        Ok(groups.get(group_key).cloned())
    }

    /// Shared handle to a group, creating it lazily on first use
    fn group_handle_or_create(&self, group_key: &str) -> StoreResult<Arc<Mutex<GroupState<T>>>> {
        if let Some(handle) = self.group_handle(group_key)? {
            return Ok(handle);
        }

        let mut groups = write_lock(&self.groups, sync_error)?;
        let handle = groups
            .entry(group_key.to_string())
            .or_insert_with(|| {
                log::debug!("Created group '{}' in store '{}'", group_key, self.name);
                Arc::new(Mutex::new(GroupState::new()))
            })
            .clone();
        Ok(handle)
    }
}

/// Insert before the first entry whose effective priority is strictly
/// lower, so equal priorities keep their arrival order
fn insert_by_priority<T>(envelopes: &mut VecDeque<Envelope<T>>, envelope: Envelope<T>) {
    let priority = effective_priority(&envelope);
    let position = envelopes
        .iter()
        .position(|existing| effective_priority(existing) < priority)
        .unwrap_or(envelopes.len());
    envelopes.insert(position, envelope);
}

fn effective_priority<T>(envelope: &Envelope<T>) -> i32 {
    envelope.priority().unwrap_or(i32::MIN)
}

impl<T: Clone + Send + 'static> GroupStore<T> for MemoryGroupStore<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority_enabled(&self) -> bool {
        self.priority_enabled
    }

    fn add_to_group(&self, group_key: &str, envelope: Envelope<T>) -> StoreResult<()> {
        let handle = self.group_handle_or_create(group_key)?;
        let mut group = lock_mutex(&handle, sync_error)?;

        log::trace!(
            "Adding envelope {} to group '{}' in store '{}'",
            envelope.id(),
            group_key,
            self.name
        );

        if self.priority_enabled {
            insert_by_priority(&mut group.envelopes, envelope);
        } else {
            group.envelopes.push_back(envelope);
        }
        group.last_modified = SystemTime::now();

        Ok(())
    }

    fn message_group(&self, group_key: &str) -> StoreResult<MessageGroup<T>> {
        match self.group_handle(group_key)? {
            Some(handle) => {
                let group = lock_mutex(&handle, sync_error)?;
                Ok(MessageGroup::snapshot(
                    group_key,
                    group.envelopes.iter().cloned().collect(),
                    group.created_at,
                    group.last_modified,
                ))
            }
            None => Ok(MessageGroup::empty(group_key)),
        }
    }

    fn poll_from_group(&self, group_key: &str) -> StoreResult<Option<Envelope<T>>> {
        let handle = match self.group_handle(group_key)? {
            Some(handle) => handle,
            None => return Ok(None),
        };

        let mut group = lock_mutex(&handle, sync_error)?;
        let polled = group.envelopes.pop_front();
        if let Some(envelope) = &polled {
            group.last_modified = SystemTime::now();
            log::trace!(
                "Polled envelope {} from group '{}' in store '{}'",
                envelope.id(),
                group_key,
                self.name
            );
        }
        Ok(polled)
    }

    fn remove_from_group(
        &self,
        group_key: &str,
        envelope_id: EnvelopeId,
    ) -> StoreResult<Option<Envelope<T>>> {
        let handle = match self.group_handle(group_key)? {
            Some(handle) => handle,
            None => return Ok(None),
        };

        let mut group = lock_mutex(&handle, sync_error)?;
        let position = group
            .envelopes
            .iter()
            .position(|envelope| envelope.id() == envelope_id);

        match position {
            Some(index) => {
                let removed = group.envelopes.remove(index);
                group.last_modified = SystemTime::now();
                log::trace!(
                    "Removed envelope {} from group '{}' in store '{}'",
                    envelope_id,
                    group_key,
                    self.name
                );
                Ok(removed)
            }
            None => Ok(None),
        }
    }

    fn group_size(&self, group_key: &str) -> StoreResult<usize> {
        match self.group_handle(group_key)? {
            Some(handle) => Ok(lock_mutex(&handle, sync_error)?.envelopes.len()),
            None => Ok(0),
        }
    }

    fn remove_group(&self, group_key: &str) -> StoreResult<usize> {
        let mut groups = write_lock(&self.groups, sync_error)?;
        match groups.remove(group_key) {
            Some(handle) => {
                let group = lock_mutex(&handle, sync_error)?;
                let discarded = group.envelopes.len();
                log::debug!(
                    "Removed group '{}' from store '{}', discarding {} envelope(s)",
                    group_key,
                    self.name,
                    discarded
                );
                Ok(discarded)
            }
            None => Ok(0),
        }
    }

    fn group_keys(&self) -> StoreResult<Vec<String>> {
        let groups = read_lock(&self.groups, sync_error)?;
        Ok(groups.keys().cloned().collect())
    }

    fn group_count(&self) -> StoreResult<usize> {
        let groups = read_lock(&self.groups, sync_error)?;
        Ok(groups.len())
    }

    fn message_count(&self) -> StoreResult<usize> {
        let groups = read_lock(&self.groups, sync_error)?;
        let mut total = 0;
        for handle in groups.values() {
            total += lock_mutex(handle, sync_error)?.envelopes.len();
        }
        Ok(total)
    }

    fn expire_idle_groups(&self, idle_for: Duration) -> StoreResult<usize> {
        let cutoff = match SystemTime::now().checked_sub(idle_for) {
            Some(cutoff) => cutoff,
            // An idle window reaching past the clock's origin matches nothing
            None => return Ok(0),
        };

        let mut groups = write_lock(&self.groups, sync_error)?;

        let mut expired_keys = Vec::new();
        for (key, handle) in groups.iter() {
            let group = lock_mutex(handle, sync_error)?;
            if group.envelopes.is_empty() && group.last_modified <= cutoff {
                expired_keys.push(key.clone());
            }
        }

        for key in &expired_keys {
            groups.remove(key);
        }

        if !expired_keys.is_empty() {
            log::debug!(
                "Expired {} idle group(s) from store '{}'",
                expired_keys.len(),
                self.name
            );
        }
        Ok(expired_keys.len())
    }

    fn stats(&self) -> StoreResult<StoreStats> {
        let groups = read_lock(&self.groups, sync_error)?;

        let mut total_messages = 0;
        let mut empty_groups = 0;
        for handle in groups.values() {
            let size = lock_mutex(handle, sync_error)?.envelopes.len();
            if size == 0 {
                empty_groups += 1;
            }
            total_messages += size;
        }

        Ok(StoreStats {
            total_groups: groups.len(),
            total_messages,
            empty_groups,
        })
    }
}
