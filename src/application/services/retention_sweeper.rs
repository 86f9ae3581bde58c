use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::application::ports::MessageRepository;

/// Deletes messages that have outlived the retention window.
#[derive(Clone)]
pub struct RetentionSweeper {
    repository: Arc<dyn MessageRepository>,
    window: Duration,
}

impl RetentionSweeper {
    pub fn new(repository: Arc<dyn MessageRepository>, window_hours: u32) -> Self {
        Self {
            repository,
            window: Duration::hours(i64::from(window_hours)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub async fn sweep(&self) -> u64 {
        self.sweep_at(Utc::now()).await
    }

    /// Never fails: store errors are logged and reported as zero deletions.
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> u64 {
        let cutoff = now - self.window;

        match self.repository.delete_older_than(cutoff).await {
            Ok(deleted) => {
                tracing::debug!(deleted, cutoff = %cutoff, "Retention sweep finished");
                deleted
            }
            Err(e) => {
                tracing::warn!(error = %e, "Retention sweep failed");
                0
            }
        }
    }
}
