use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Message, NewMessage};

use super::RepositoryError;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores the message and returns it with the id the store assigned.
    async fn insert(&self, message: &NewMessage) -> Result<Message, RepositoryError>;

    /// All messages in ascending id order.
    async fn list(&self) -> Result<Vec<Message>, RepositoryError>;

    async fn delete_all(&self) -> Result<u64, RepositoryError>;

    /// Removes every message whose timestamp is at or before `cutoff`.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
}
