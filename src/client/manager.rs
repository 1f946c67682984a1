use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};

use crate::models::Submission;
use crate::validate;

use super::ClientError;
use super::queue::PendingQueue;
use super::transport::Transport;

/// Nothing observable depends on the exact retry interval, so it is a
/// parameter of [`QueueManager::run`] with a conservative default.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(60);

/// Owns the Pending Queue and drives the retry protocol. All queue mutations
/// go through one mutex, so a user-initiated submit and a background drain
/// never interleave on the same entry.
pub struct QueueManager {
    queue: Mutex<PendingQueue>,
    transport: Arc<dyn Transport>,
}

/// Outcome of a user-initiated submit. Transport failure is deliberately not
/// an error: the submission is durably queued and will be retried, which the
/// caller should report as "saved, will retry" rather than a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    SavedForRetry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainStats {
    pub sent: usize,
    pub remaining: usize,
}

impl QueueManager {
    pub fn new(queue: PendingQueue, transport: Arc<dyn Transport>) -> Self {
        Self {
            queue: Mutex::new(queue),
            transport,
        }
    }

    pub async fn pending(&self) -> usize {
        self.queue.lock().await.len()
    }

    /// Validate, then attempt a direct send. A valid submission that fails
    /// transport is appended to the durable queue; only validation or queue
    /// persistence problems surface as errors.
    pub async fn submit(&self, submission: Submission) -> Result<SubmitOutcome, ClientError> {
        let submission = validate::clean(&submission)?;

        match self.transport.submit(&submission).await {
            Ok(()) => Ok(SubmitOutcome::Accepted),
            Err(e) => {
                tracing::debug!("Direct send failed, queueing for retry: {e}");
                let mut queue = self.queue.lock().await;
                queue.push(submission)?;
                Ok(SubmitOutcome::SavedForRetry)
            }
        }
    }

    /// One drain pass: attempt every queued entry once, oldest first.
    /// Accepted entries are removed; failed entries stay, in order, for the
    /// next pass. The queue is persisted after the full pass.
    pub async fn drain(&self) -> Result<DrainStats, ClientError> {
        let mut queue = self.queue.lock().await;

        if queue.is_empty() {
            return Ok(DrainStats {
                sent: 0,
                remaining: 0,
            });
        }

        let entries = queue.entries().to_vec();
        let mut remaining = Vec::new();
        let mut sent = 0;

        for entry in entries {
            match self.transport.submit(&entry).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    tracing::debug!("Retry failed, entry stays queued: {e}");
                    remaining.push(entry);
                }
            }
        }

        let stats = DrainStats {
            sent,
            remaining: remaining.len(),
        };
        queue.replace(remaining)?;

        Ok(stats)
    }

    /// Drain once at startup, then on every tick of `interval` until the
    /// shutdown signal flips. Entries retry indefinitely; there is no
    /// backoff, cap, or expiry.
    pub async fn run(self: Arc<Self>, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.drain().await {
                Ok(stats) if stats.sent > 0 => {
                    tracing::info!(
                        "Drain pass sent {} pending submission(s), {} remaining",
                        stats.sent,
                        stats.remaining
                    );
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Drain pass failed: {e}"),
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {}
            }
        }

        tracing::debug!("Queue manager stopped");
    }
}
