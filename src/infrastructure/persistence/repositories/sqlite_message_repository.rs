use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::instrument;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{
    Message, MessageId, MessageRole, NewMessage, format_timestamp, parse_timestamp,
};

/// SQLite-backed message table.
///
/// Opens a fresh connection for every operation and closes it before
/// returning; the database file is the only shared state.
pub struct SqliteMessageRepository {
    options: SqliteConnectOptions,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    role: String,
    text: String,
    translated_text: String,
    timestamp: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = RepositoryError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&row.timestamp).map_err(|e| {
            RepositoryError::CorruptRow(format!("message {}: timestamp: {}", row.id, e))
        })?;

        Ok(Message {
            id: MessageId::from_i64(row.id),
            role: MessageRole::new(row.role),
            text: row.text,
            translated_text: row.translated_text,
            timestamp,
        })
    }
}

impl SqliteMessageRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            options: SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
        }
    }

    /// Creates the database file and the message table when absent.
    #[instrument(skip(self))]
    pub async fn prepare(&self) -> Result<(), RepositoryError> {
        let mut conn = self.connect().await?;

        sqlx::migrate!()
            .run(&mut conn)
            .await
            .map_err(|e| RepositoryError::QueryFailed(format!("migration: {}", e)))?;

        close(conn).await;
        tracing::info!("Message store ready");
        Ok(())
    }

    async fn connect(&self) -> Result<SqliteConnection, RepositoryError> {
        self.options
            .connect()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close SQLite connection cleanly");
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    #[instrument(skip(self, message), fields(role = %message.role))]
    async fn insert(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO messages (role, text, translated_text, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(message.role.as_str())
        .bind(&message.text)
        .bind(&message.translated_text)
        .bind(format_timestamp(&message.timestamp))
        .execute(&mut conn)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()));

        close(conn).await;

        let id = MessageId::from_i64(result?.last_insert_rowid());
        Ok(message.clone().with_id(id))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, role, text, translated_text, timestamp
            FROM messages
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()));

        close(conn).await;

        rows?.into_iter().map(Message::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("DELETE FROM messages")
            .execute(&mut conn)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()));

        close(conn).await;

        Ok(result?.rows_affected())
    }

    #[instrument(skip(self), fields(cutoff = %cutoff))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let mut conn = self.connect().await?;

        let result = sqlx::query("DELETE FROM messages WHERE timestamp <= ?")
            .bind(format_timestamp(&cutoff))
            .execute(&mut conn)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()));

        close(conn).await;

        Ok(result?.rows_affected())
    }
}
