//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `parlor-core` using sqlx with split
//! read/write pools. Appends are serialized behind a lock that also tracks the
//! last issued timestamp, so timestamps never go backwards when the wall clock
//! does.

use chrono::{Local, NaiveDateTime};
use parlor_core::repository::message::MessageRepository;
use parlor_types::error::RepositoryError;
use parlor_types::message::{Message, Page, Sender};
use sqlx::Row;
use tokio::sync::Mutex;

use super::pool::DatabasePool;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
    last_timestamp: Mutex<Option<NaiveDateTime>>,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            pool,
            last_timestamp: Mutex::new(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal row types
// ---------------------------------------------------------------------------

struct MessageRow {
    id: i64,
    username: String,
    message: String,
    timestamp: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            message: row.try_get("message")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let sender = self
            .username
            .parse::<Sender>()
            .map_err(|e| RepositoryError::CorruptRow(format!("message {}: {e}", self.id)))?;

        Ok(Message {
            id: self.id,
            sender,
            text: self.message,
            timestamp: self.timestamp,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// The later of `now` and the previously issued timestamp.
fn next_timestamp(previous: Option<NaiveDateTime>, now: NaiveDateTime) -> NaiveDateTime {
    match previous {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

// ---------------------------------------------------------------------------
// MessageRepository impl
// ---------------------------------------------------------------------------

impl MessageRepository for SqliteMessageRepository {
    async fn append(&self, sender: Sender, text: &str) -> Result<Message, RepositoryError> {
        let mut last = self.last_timestamp.lock().await;
        let stamp = next_timestamp(*last, Local::now().naive_local());
        let timestamp = format_timestamp(&stamp);

        let result =
            sqlx::query("INSERT INTO messages (username, message, timestamp) VALUES (?, ?, ?)")
                .bind(sender.as_str())
                .bind(text)
                .bind(&timestamp)
                .execute(&self.pool.writer)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        *last = Some(stamp);

        Ok(Message {
            id: result.last_insert_rowid(),
            sender,
            text: text.to_string(),
            timestamp,
        })
    }

    async fn recent(&self, page: Page) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, username, message, timestamp FROM (
                   SELECT id, username, message, timestamp FROM messages
                   ORDER BY id DESC
                   LIMIT ? OFFSET ?
               )
               ORDER BY id ASC"#,
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut msgs = Vec::with_capacity(rows.len());
        for row in &rows {
            let r = MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            msgs.push(r.into_message()?);
        }
        Ok(msgs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn test_pool() -> (DatabasePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open(&dir.path().join("test.db")).await.unwrap();
        (pool, dir)
    }

    async fn seed(repo: &SqliteMessageRepository, n: usize) {
        for i in 0..n {
            let sender = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            repo.append(sender, &format!("message {i}")).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);

        let first = repo.append(Sender::User, "hello").await.unwrap();
        let second = repo.append(Sender::Bot, "Hello! How can I assist you today?").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.sender, Sender::User);
        assert_eq!(second.sender, Sender::Bot);
        assert!(second.timestamp >= first.timestamp);
    }

    #[tokio::test]
    async fn test_append_is_visible_to_readers() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);

        let stored = repo.append(Sender::User, "persisted").await.unwrap();
        let page = repo.recent(Page::default()).await.unwrap();

        assert_eq!(page, vec![stored]);
    }

    #[tokio::test]
    async fn test_timestamp_is_iso8601() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);

        let msg = repo.append(Sender::User, "when?").await.unwrap();

        assert!(NaiveDateTime::parse_from_str(&msg.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(msg.timestamp.len(), "2024-01-01T00:00:00.000000".len());
    }

    #[tokio::test]
    async fn test_recent_returns_chronological_window() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);
        seed(&repo, 12).await;

        let page = repo.recent(Page::latest(5)).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![8, 9, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_recent_with_offset_skips_newest() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);
        seed(&repo, 12).await;

        let page = repo.recent(Page::new(4, 3)).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9]);
    }

    #[tokio::test]
    async fn test_recent_offset_past_end_is_empty() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);
        seed(&repo, 3).await;

        assert!(repo.recent(Page::new(10, 3)).await.unwrap().is_empty());
        assert!(repo.recent(Page::new(0, 0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_partial_last_page() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);
        seed(&repo, 5).await;

        let page = repo.recent(Page::new(4, 3)).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_get_unique_ids() {
        let (pool, _dir) = test_pool().await;
        let repo = Arc::new(SqliteMessageRepository::new(pool));

        let mut handles = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.append(Sender::User, &format!("concurrent {i}")).await.unwrap()
            }));
        }
        let mut stored = Vec::new();
        for handle in handles {
            stored.push(handle.await.unwrap());
        }

        let page = repo.recent(Page::latest(100)).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());

        // Timestamps follow id order.
        for pair in page.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        assert_eq!(stored.len(), 20);
    }

    #[tokio::test]
    async fn test_corrupt_username_is_reported() {
        let (pool, _dir) = test_pool().await;
        sqlx::query("INSERT INTO messages (username, message, timestamp) VALUES ('Admin', 'x', 't')")
            .execute(&pool.writer)
            .await
            .unwrap();
        let repo = SqliteMessageRepository::new(pool);

        let err = repo.recent(Page::default()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptRow(_)));
    }

    #[test]
    fn test_next_timestamp_never_goes_backwards() {
        let earlier = NaiveDateTime::parse_from_str("2024-01-01T10:00:00.000000", TIMESTAMP_FORMAT).unwrap();
        let later = NaiveDateTime::parse_from_str("2024-01-01T10:00:01.000000", TIMESTAMP_FORMAT).unwrap();

        assert_eq!(next_timestamp(None, earlier), earlier);
        assert_eq!(next_timestamp(Some(earlier), later), later);
        assert_eq!(next_timestamp(Some(later), earlier), later);
    }
}
