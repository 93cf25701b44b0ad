//! Application state wiring the chat service to its SQLite repository.
//!
//! `ChatService` is generic over the repository trait; AppState pins it to
//! the concrete infra implementation.

use std::path::Path;
use std::sync::Arc;

use parlor_core::chat::service::{ChatService, ChatSettings};
use parlor_core::reply::Responder;
use parlor_infra::sqlite::message::SqliteMessageRepository;
use parlor_infra::sqlite::pool::DatabasePool;
use parlor_types::config::ServerConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteChatService = ChatService<SqliteMessageRepository>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    /// `limit` applied when a history query omits it.
    pub default_page_size: u32,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Open the configured database (creating it and its parent directory
    /// if needed) and wire the chat service.
    pub async fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        let db_path = Path::new(&config.database_path);
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db_pool = DatabasePool::open(db_path).await?;
        Ok(Self::with_pool(db_pool, Responder::new(), config))
    }

    /// Wire services around an already-open pool.
    pub fn with_pool(db_pool: DatabasePool, responder: Responder, config: &ServerConfig) -> Self {
        let settings = ChatSettings {
            typing_delay: config.typing_delay(),
            history_window: config.history_window,
        };
        let repo = SqliteMessageRepository::new(db_pool.clone());

        Self {
            chat_service: Arc::new(ChatService::new(repo, responder, settings)),
            default_page_size: config.default_page_size,
            db_pool,
        }
    }
}

/// State over a throwaway database with no typing delay and a seeded
/// responder. Keep the returned directory alive for the test's duration.
#[cfg(test)]
pub async fn test_state() -> (AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        database_path: dir.path().join("test.db").display().to_string(),
        typing_delay_ms: 0,
        ..ServerConfig::default()
    };
    let pool = DatabasePool::open(Path::new(&config.database_path)).await.unwrap();
    (AppState::with_pool(pool, Responder::seeded(7), &config), dir)
}
