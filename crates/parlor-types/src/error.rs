use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parlor-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("corrupt row: {0}")]
    CorruptRow(String),
}

/// Errors raised while handling a chat exchange.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    Parse { path: String, reason: String },
}
