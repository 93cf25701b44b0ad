//! Message repository trait definition.
//!
//! Defines the storage interface for the append-only conversation log. The
//! infrastructure layer (parlor-infra) implements this trait with SQLite
//! persistence.

use parlor_types::error::RepositoryError;
use parlor_types::message::{Message, Page, Sender};

/// Repository trait for the append-only message log.
///
/// Implementations must serialize `append` so that ids are strictly
/// increasing and timestamps never go backwards, even when called from many
/// tasks at once. Reads may run concurrently with writes.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait MessageRepository: Send + Sync {
    /// Persist a new message and return it with its assigned id and timestamp.
    ///
    /// The row is committed before the future resolves.
    fn append(
        &self,
        sender: Sender,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Read a recency window, returned oldest-first.
    fn recent(
        &self,
        page: Page,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
