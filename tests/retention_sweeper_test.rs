use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use medlingo::application::ports::{MessageRepository, RepositoryError};
use medlingo::application::services::RetentionSweeper;
use medlingo::domain::{Message, MessageRole, NewMessage};
use medlingo::infrastructure::persistence::InMemoryMessageRepository;

struct UnavailableRepository;

#[async_trait::async_trait]
impl MessageRepository for UnavailableRepository {
    async fn insert(&self, _message: &NewMessage) -> Result<Message, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("locked".to_string()))
    }

    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("locked".to_string()))
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("locked".to_string()))
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("locked".to_string()))
    }
}

async fn insert_aged(repository: &InMemoryMessageRepository, text: &str, timestamp: DateTime<Utc>) {
    let mut message = NewMessage::new(
        MessageRole::new("doctor"),
        text.to_string(),
        text.to_uppercase(),
    );
    message.timestamp = timestamp;
    repository.insert(&message).await.unwrap();
}

#[tokio::test]
async fn given_default_window_when_sweeping_then_messages_at_or_before_cutoff_are_deleted() {
    let repository = Arc::new(InMemoryMessageRepository::new());
    let now = Utc::now();
    insert_aged(&repository, "two hours ago", now - Duration::hours(2)).await;
    insert_aged(&repository, "exactly one hour ago", now - Duration::hours(1)).await;
    insert_aged(&repository, "ten minutes ago", now - Duration::minutes(10)).await;

    let sweeper = RetentionSweeper::new(repository.clone(), 1);
    let deleted = sweeper.sweep_at(now).await;

    assert_eq!(deleted, 2);
    let remaining = repository.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "ten minutes ago");
}

#[tokio::test]
async fn given_wider_window_when_sweeping_then_recent_messages_survive() {
    let repository = Arc::new(InMemoryMessageRepository::new());
    let now = Utc::now();
    insert_aged(&repository, "two hours ago", now - Duration::hours(2)).await;
    insert_aged(&repository, "two days ago", now - Duration::days(2)).await;

    let sweeper = RetentionSweeper::new(repository.clone(), 24);
    let deleted = sweeper.sweep_at(now).await;

    assert_eq!(sweeper.window(), Duration::hours(24));
    assert_eq!(deleted, 1);
    assert_eq!(repository.list().await.unwrap()[0].text, "two hours ago");
}

#[tokio::test]
async fn given_failing_store_when_sweeping_then_failure_is_swallowed() {
    let sweeper = RetentionSweeper::new(Arc::new(UnavailableRepository), 1);

    let deleted = sweeper.sweep().await;

    assert_eq!(deleted, 0);
}
