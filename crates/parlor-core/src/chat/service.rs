//! Chat service orchestrating one message exchange.
//!
//! ChatService sequences the user insert, the typing delay, reply generation,
//! the bot insert and the recent-window read against any `MessageRepository`.

use std::time::Duration;

use parlor_types::error::ChatError;
use parlor_types::message::{Exchange, Message, Page, Sender};
use tracing::{debug, info};

use crate::reply::Responder;
use crate::repository::message::MessageRepository;

/// Tunables for an exchange.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Pause between persisting the user message and generating the reply.
    pub typing_delay: Duration,
    /// How many recent messages to return with each exchange.
    pub history_window: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(500),
            history_window: 10,
        }
    }
}

/// Orchestrates message exchanges and history reads.
///
/// Generic over `MessageRepository` to maintain clean architecture
/// (parlor-core never depends on parlor-infra).
pub struct ChatService<R: MessageRepository> {
    repo: R,
    responder: Responder,
    settings: ChatSettings,
}

impl<R: MessageRepository> ChatService<R> {
    pub fn new(repo: R, responder: Responder, settings: ChatSettings) -> Self {
        Self {
            repo,
            responder,
            settings,
        }
    }

    /// Access the message repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Post a user message and produce the bot's reply.
    ///
    /// The user row is committed before the typing delay starts and the bot
    /// row is committed before this returns. The two inserts are not atomic:
    /// if the second fails the user message stays in the log without a reply.
    pub async fn post_message(&self, text: &str) -> Result<Exchange, ChatError> {
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user_message = self.repo.append(Sender::User, text).await?;
        debug!(id = user_message.id, "User message stored");

        if !self.settings.typing_delay.is_zero() {
            tokio::time::sleep(self.settings.typing_delay).await;
        }

        let reply = self.responder.generate(text);
        let bot_response = self.repo.append(Sender::Bot, &reply).await?;

        let recent = self
            .repo
            .recent(Page::latest(self.settings.history_window))
            .await?;

        info!(
            user_id = user_message.id,
            bot_id = bot_response.id,
            "Exchange completed"
        );

        Ok(Exchange {
            user_message,
            bot_response,
            recent,
        })
    }

    /// Read a page of history, oldest-first.
    pub async fn history(&self, page: Page) -> Result<Vec<Message>, ChatError> {
        Ok(self.repo.recent(page).await?)
    }
}
