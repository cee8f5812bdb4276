//! Internal store-backed channel engine
//!
//! This module provides the machinery shared by the queue and priority
//! channel types:
//! - Envelope buffering delegated to a GroupStore group under the key
//!   `<store>:<channel>`
//! - Capacity enforcement through a semaphore, one permit per free slot
//! - Cooperative receive waits through a notifier, no busy-polling

use crate::channel::error::{ChannelError, ChannelResult};
use crate::message::envelope::Envelope;
use crate::store::traits::GroupStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, Semaphore, TryAcquireError};
use tokio::time::{timeout, timeout_at, Instant};

/// Store-backed channel engine
///
/// Capacity accounting invariant: every envelope buffered in the backing
/// group holds exactly one forgotten permit, so the semaphore's free
/// permits always equal the remaining slots. Receive returns a permit
/// per envelope taken; `clear` returns one per envelope discarded.
pub(crate) struct StoreBackedChannel<T> {
    /// Logical channel name
    name: String,

    /// Backing group key, `<store>:<channel>`
    group_key: String,

    /// Configured capacity, zero meaning unbounded
    capacity: usize,

    /// Free-slot tracking, absent on unbounded channels
    slots: Option<Semaphore>,

    /// Wakes one parked receiver per deposited envelope
    available: Notify,

    /// The store holding this channel's group
    store: Arc<dyn GroupStore<T>>,
}

impl<T: Send + 'static> StoreBackedChannel<T> {
    pub(crate) fn new(name: String, store: Arc<dyn GroupStore<T>>, capacity: usize) -> Self {
        let group_key = format!("{}:{}", store.name(), name);
        log::debug!(
            "Creating channel '{}' over store '{}' (group key '{}', capacity {})",
            name,
            store.name(),
            group_key,
            capacity
        );
        Self {
            name,
            group_key,
            capacity,
            slots: if capacity > 0 {
                Some(Semaphore::new(capacity))
            } else {
                None
            },
            available: Notify::new(),
            store,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn group_key(&self) -> &str {
        &self.group_key
    }

    /// Configured capacity; zero means unbounded
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn store(&self) -> &Arc<dyn GroupStore<T>> {
        &self.store
    }

    pub(crate) fn len(&self) -> ChannelResult<usize> {
        Ok(self.store.group_size(&self.group_key)?)
    }

    pub(crate) fn is_empty(&self) -> ChannelResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Send, waiting indefinitely for a free slot on a bounded channel
    pub(crate) async fn send(&self, envelope: Envelope<T>) -> ChannelResult<()> {
        match &self.slots {
            Some(slots) => {
                let permit = slots
                    .acquire()
                    .await
                    .map_err(|_closed| self.slots_closed_error())?;
                self.deposit(envelope)?;
                permit.forget();
                Ok(())
            }
            None => self.deposit(envelope),
        }
    }

    /// Send, waiting up to `wait` for a free slot
    pub(crate) async fn send_timeout(
        &self,
        envelope: Envelope<T>,
        wait: Duration,
    ) -> ChannelResult<()> {
        let slots = match &self.slots {
            Some(slots) => slots,
            None => return self.deposit(envelope),
        };

        if wait.is_zero() {
            return self.try_send(envelope);
        }

        match timeout(wait, slots.acquire()).await {
            Ok(Ok(permit)) => {
                self.deposit(envelope)?;
                permit.forget();
                Ok(())
            }
            Ok(Err(_closed)) => Err(self.slots_closed_error()),
            Err(_elapsed) => Err(ChannelError::Full {
                capacity: self.capacity,
            }),
        }
    }

    /// Send without waiting; fails with `Full` when at capacity
    pub(crate) fn try_send(&self, envelope: Envelope<T>) -> ChannelResult<()> {
        match &self.slots {
            Some(slots) => match slots.try_acquire() {
                Ok(permit) => {
                    self.deposit(envelope)?;
                    permit.forget();
                    Ok(())
                }
                Err(TryAcquireError::NoPermits) => Err(ChannelError::Full {
                    capacity: self.capacity,
                }),
                Err(TryAcquireError::Closed) => Err(self.slots_closed_error()),
            },
            None => self.deposit(envelope),
        }
    }

    /// Receive, waiting up to `wait` for an envelope to arrive
    pub(crate) async fn receive(&self, wait: Duration) -> ChannelResult<Option<Envelope<T>>> {
        if wait.is_zero() {
            return self.try_receive();
        }

        let deadline = Instant::now().checked_add(wait);
        loop {
            // Register interest before checking, so a deposit landing
            // between the check and the park still wakes this receiver
            let notified = self.available.notified();

            if let Some(envelope) = self.take_head()? {
                return Ok(Some(envelope));
            }

            match deadline {
                Some(deadline) => match timeout_at(deadline, notified).await {
                    Ok(()) => {}
                    // One last poll catches an envelope deposited right
                    // at expiry whose wakeup lost the race
                    Err(_elapsed) => return self.take_head(),
                },
                // A wait too large for a deadline is effectively unbounded
                None => notified.await,
            }
        }
    }

    /// Receive without waiting
    pub(crate) fn try_receive(&self) -> ChannelResult<Option<Envelope<T>>> {
        self.take_head()
    }

    /// Discard all buffered envelopes, returning how many were dropped
    pub(crate) fn clear(&self) -> ChannelResult<usize> {
        let discarded = self.store.remove_group(&self.group_key)?;
        if let Some(slots) = &self.slots {
            slots.add_permits(discarded);
        }
        if discarded > 0 {
            log::debug!(
                "Cleared {} envelope(s) from channel '{}'",
                discarded,
                self.name
            );
        }
        Ok(discarded)
    }

    /// Store the envelope and wake one parked receiver
    ///
    /// A store failure propagates before the caller forgets its permit,
    /// so the slot is released rather than leaked.
    fn deposit(&self, envelope: Envelope<T>) -> ChannelResult<()> {
        log::trace!(
            "Sending envelope {} through channel '{}'",
            envelope.id(),
            self.name
        );
        self.store.add_to_group(&self.group_key, envelope)?;
        self.available.notify_one();
        Ok(())
    }

    /// Poll the head envelope; on success release one capacity slot and
    /// pass the wakeup along in case further envelopes remain
    fn take_head(&self) -> ChannelResult<Option<Envelope<T>>> {
        match self.store.poll_from_group(&self.group_key)? {
            Some(envelope) => {
                if let Some(slots) = &self.slots {
                    slots.add_permits(1);
                }
                self.available.notify_one();
                log::trace!(
                    "Received envelope {} from channel '{}'",
                    envelope.id(),
                    self.name
                );
                Ok(Some(envelope))
            }
            None => Ok(None),
        }
    }

    fn slots_closed_error(&self) -> ChannelError {
        ChannelError::OperationFailed {
            message: format!("Capacity semaphore closed for channel '{}'", self.name),
        }
    }
}
