//! Cancellable delayed tasks
//!
//! Simulated latency in the demos and the notice auto-dismiss both run as a
//! [`DelayedTask`]: a spawned sleep followed by a completion future. The
//! completion never runs once [`DelayedTask::cancel`] has been observed, and
//! resolves to `false` when it finds its owner has moved on without it.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How a delayed task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The delay elapsed and the completion applied
    Completed,
    /// The delay elapsed but the completion found itself stale
    Superseded,
    /// The task was cancelled before the delay elapsed
    Cancelled,
}

/// Handle to a pending delayed completion
#[derive(Debug)]
pub struct DelayedTask {
    token: CancellationToken,
    join: JoinHandle<TaskOutcome>,
}

impl DelayedTask {
    /// Spawn `completion` to run after `delay` unless cancelled first
    pub fn spawn<F>(delay: Duration, completion: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let join = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    debug!(delay_ms = delay.as_millis() as u64, "delayed task cancelled");
                    TaskOutcome::Cancelled
                }
                _ = tokio::time::sleep(delay) => {
                    if completion.await {
                        TaskOutcome::Completed
                    } else {
                        TaskOutcome::Superseded
                    }
                }
            }
        });

        Self { token, join }
    }

    /// Token that cancels this task; owners keep a clone to cancel later
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel the pending completion
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the task to end
    pub async fn wait(self) -> TaskOutcome {
        // A panicking or aborted completion counts as not having completed
        self.join.await.unwrap_or(TaskOutcome::Cancelled)
    }
}
