//! Wire shapes for API responses.
//!
//! Every message leaves the server as a [`MessageBody`]; the conversion from
//! the domain [`Message`] lives here and nowhere else.

use serde::Serialize;

use parlor_types::message::{Exchange, Message, Sender};

/// One message as it appears on the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageBody {
    pub id: i64,
    pub username: Sender,
    pub message: String,
    pub timestamp: String,
}

impl From<&Message> for MessageBody {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id,
            username: m.sender,
            message: m.text.clone(),
            timestamp: m.timestamp.clone(),
        }
    }
}

fn bodies(messages: &[Message]) -> Vec<MessageBody> {
    messages.iter().map(MessageBody::from).collect()
}

/// Body of a successful `POST /api/message`.
#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub user_message: MessageBody,
    pub bot_response: MessageBody,
    /// Recent window, chronological.
    pub messages: Vec<MessageBody>,
}

impl From<&Exchange> for ExchangeResponse {
    fn from(e: &Exchange) -> Self {
        Self {
            user_message: MessageBody::from(&e.user_message),
            bot_response: MessageBody::from(&e.bot_response),
            messages: bodies(&e.recent),
        }
    }
}

/// Body of `GET /api/messages`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageBody>,
}

impl From<&[Message]> for HistoryResponse {
    fn from(messages: &[Message]) -> Self {
        Self {
            messages: bodies(messages),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(id: i64, sender: Sender, text: &str) -> Message {
        Message {
            id,
            sender,
            text: text.to_string(),
            timestamp: "2024-05-01T09:30:00.123456".to_string(),
        }
    }

    #[test]
    fn test_message_body_wire_shape() {
        let body = MessageBody::from(&message(7, Sender::Bot, "Goodbye! Have a great day!"));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "id": 7,
                "username": "Bot",
                "message": "Goodbye! Have a great day!",
                "timestamp": "2024-05-01T09:30:00.123456",
            })
        );
    }

    #[test]
    fn test_exchange_response_keys() {
        let user = message(1, Sender::User, "bye");
        let bot = message(2, Sender::Bot, "Goodbye! Have a great day!");
        let exchange = Exchange {
            user_message: user.clone(),
            bot_response: bot.clone(),
            recent: vec![user, bot],
        };

        let value = serde_json::to_value(ExchangeResponse::from(&exchange)).unwrap();

        assert_eq!(value["user_message"]["username"], "User");
        assert_eq!(value["bot_response"]["id"], 2);
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_error_body_shape() {
        let value = serde_json::to_value(ErrorBody::new("Not found")).unwrap();
        assert_eq!(value, json!({"error": "Not found"}));
    }
}
