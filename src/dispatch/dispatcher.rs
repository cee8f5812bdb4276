//! Polling dispatcher implementation

use crate::channel::traits::PollableChannel;
use crate::dispatch::error::{DispatchError, DispatchResult};
use crate::dispatch::traits::MessageHandler;
use crate::dispatch::DispatchStats;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// How long one poll waits before re-checking for shutdown
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Pulls envelopes from an input channel and hands them to a handler
///
/// The dispatcher is constructed idle; [`start`] consumes it and spawns
/// the polling task. Each loop iteration receives with a bounded wait so
/// a shutdown signal is observed within one poll interval even when the
/// channel stays empty.
///
/// [`start`]: Dispatcher::start
pub struct Dispatcher<T> {
    input: Arc<dyn PollableChannel<T>>,
    handler: Arc<dyn MessageHandler<T>>,
    poll_timeout: Duration,
}

impl<T: Send + 'static> Dispatcher<T> {
    /// Create a dispatcher with the default poll timeout
    pub fn new(input: Arc<dyn PollableChannel<T>>, handler: Arc<dyn MessageHandler<T>>) -> Self {
        Self::with_poll_timeout(input, handler, DEFAULT_POLL_TIMEOUT)
    }

    /// Create a dispatcher polling with a custom timeout
    ///
    /// The timeout bounds both delivery latency when the channel is idle
    /// and the worst-case delay before a stop request takes effect.
    pub fn with_poll_timeout(
        input: Arc<dyn PollableChannel<T>>,
        handler: Arc<dyn MessageHandler<T>>,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            input,
            handler,
            poll_timeout,
        }
    }

    /// Spawn the polling task and return its control handle
    pub fn start(self) -> DispatcherHandle {
        let (shutdown, mut shutdown_rx) = broadcast::channel(1);
        let input = self.input;
        let handler = self.handler;
        let poll_timeout = self.poll_timeout;

        log::debug!("Starting dispatcher on channel '{}'", input.name());

        let task = tokio::spawn(async move {
            let mut stats = DispatchStats::default();

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        log::debug!(
                            "Dispatcher on channel '{}' stopping: {} delivered, {} failed",
                            input.name(),
                            stats.delivered,
                            stats.failed
                        );
                        break;
                    }
                    polled = input.receive(poll_timeout) => match polled {
                        Ok(Some(envelope)) => {
                            // The envelope left the input group with the
                            // receive; from here it is handed off at most
                            // once, with no retry on failure
                            let envelope_id = envelope.id();
                            match handler.handle(envelope).await {
                                Ok(()) => stats.delivered += 1,
                                Err(e) => {
                                    stats.failed += 1;
                                    log::warn!(
                                        "Handler failed on envelope {} from channel '{}': {}",
                                        envelope_id,
                                        input.name(),
                                        e
                                    );
                                }
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            log::error!(
                                "Dispatcher receive failed on channel '{}', stopping: {}",
                                input.name(),
                                e
                            );
                            break;
                        }
                    },
                }
            }

            stats
        });

        DispatcherHandle { shutdown, task }
    }
}

/// Control handle for a running dispatcher
pub struct DispatcherHandle {
    shutdown: broadcast::Sender<()>,
    task: JoinHandle<DispatchStats>,
}

impl DispatcherHandle {
    /// Whether the polling task is still alive
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signal shutdown and wait for the task to drain
    ///
    /// Resolves with the delivery counters. Takes effect within one poll
    /// interval; envelopes still buffered in the input channel stay
    /// there.
    pub async fn stop(self) -> DispatchResult<DispatchStats> {
        // A task that already exited has dropped its receiver; the send
        // error carries no further information
        let _ = self.shutdown.send(());

        self.task.await.map_err(|e| DispatchError::Handler {
            message: format!("Dispatch task terminated abnormally: {}", e),
        })
    }
}
