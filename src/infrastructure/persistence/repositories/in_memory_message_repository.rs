use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{Message, MessageId, NewMessage};

/// Process-local message table for offline runs and tests.
pub struct InMemoryMessageRepository {
    state: Mutex<State>,
}

struct State {
    rows: Vec<Message>,
    last_id: i64,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut state = self.state.lock().await;
        // Ids are never reused, even after deletes.
        state.last_id += 1;
        let stored = message.clone().with_id(MessageId::from_i64(state.last_id));
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        Ok(self.state.lock().await.rows.clone())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().await;
        let deleted = state.rows.len() as u64;
        state.rows.clear();
        Ok(deleted)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().await;
        let before = state.rows.len();
        state.rows.retain(|m| m.timestamp > cutoff);
        Ok((before - state.rows.len()) as u64)
    }
}
