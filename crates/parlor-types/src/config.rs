//! Server configuration types for Parlor.
//!
//! `ServerConfig` is the optional `parlor.toml` plus whatever the CLI
//! overrides. All fields have defaults, so an empty file is valid.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("invalid log format: '{other}'")),
        }
    }
}

/// Runtime configuration for the chat server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    pub port: u16,
    /// SQLite database file, created on first run.
    pub database_path: String,
    /// Pause between storing the user message and storing the reply.
    pub typing_delay_ms: u64,
    /// Number of recent messages returned alongside a posted exchange.
    pub history_window: u32,
    /// `limit` used by `GET /api/messages` when the query omits it.
    pub default_page_size: u32,
    pub log_format: LogFormat,
    /// Export spans through OpenTelemetry (stdout exporter).
    pub otel: bool,
}

impl ServerConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_path: "chat_messages.db".to_string(),
            typing_delay_ms: 500,
            history_window: 10,
            default_page_size: crate::message::DEFAULT_PAGE_LIMIT,
            log_format: LogFormat::Text,
            otel: false,
        }
    }
}
