//! Message log domain types.
//!
//! A `Message` is one row of the append-only conversation log. Rows are
//! written either by the user (via the HTTP API) or by the bot (the canned
//! reply generated for each user message).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of messages returned by a history query.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Who authored a message.
///
/// Stored verbatim in the `username` column as `"User"` or `"Bot"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Sender::User),
            "Bot" => Ok(Sender::Bot),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A persisted message.
///
/// `id` and `timestamp` are assigned by the store at insertion time and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Auto-increment row id, strictly increasing in insertion order.
    pub id: i64,
    pub sender: Sender,
    pub text: String,
    /// ISO-8601 local timestamp (`YYYY-MM-DDTHH:MM:SS.ffffff`).
    pub timestamp: String,
}

/// A recency window over the log: skip `offset` newest messages, then take
/// up to `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// The `limit` most recent messages.
    pub fn latest(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// The result of posting one user message: both stored rows plus the recent
/// window read back after the reply was written.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user_message: Message,
    pub bot_response: Message,
    /// Chronological, newest last.
    pub recent: Vec<Message>,
}
