//! Message exchange handlers.
//!
//! `POST /api/message` stores the user's text, waits out the typing delay,
//! stores the bot's reply and returns both plus the recent window.
//! `GET /api/messages` pages through history.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde_json::Value;

use parlor_types::error::ChatError;

use crate::http::error::AppError;
use crate::http::extractors::query::Pagination;
use crate::http::response::{ExchangeResponse, HistoryResponse};
use crate::state::AppState;

/// Pull the `message` string out of a request body.
///
/// Missing, null or empty counts as empty. A body that parses but is not an
/// object has no `message` key and is therefore also empty.
pub fn extract_message(body: &[u8]) -> Result<String, AppError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;

    match payload.get("message") {
        None | Some(Value::Null) => Err(ChatError::EmptyMessage.into()),
        Some(Value::String(text)) if text.is_empty() => Err(ChatError::EmptyMessage.into()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(AppError::Validation("Message must be a string".to_string())),
    }
}

/// POST /api/message - Post a user message and receive the bot's reply.
pub async fn post_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ExchangeResponse>), AppError> {
    let body = body.map_err(|r| AppError::Rejected(r.status(), r.body_text()))?;
    let text = extract_message(&body)?;

    let exchange = state.chat_service.post_message(&text).await?;

    Ok((StatusCode::CREATED, Json(ExchangeResponse::from(&exchange))))
}

/// GET /api/messages - Page through history, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<HistoryResponse>, AppError> {
    let messages = state.chat_service.history(page).await?;
    Ok(Json(HistoryResponse::from(messages.as_slice())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_ok() {
        assert_eq!(extract_message(br#"{"message": "hi"}"#).unwrap(), "hi");
    }

    #[test]
    fn test_extract_message_ignores_extra_fields() {
        let text = extract_message(br#"{"message": "ok", "user": "x"}"#).unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_extract_message_invalid_json() {
        let err = extract_message(b"not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidJson));

        let err = extract_message(b"").unwrap_err();
        assert!(matches!(err, AppError::InvalidJson));
    }

    #[test]
    fn test_extract_message_empty_variants() {
        let bodies: [&[u8]; 4] = [br#"{}"#, br#"{"message": ""}"#, br#"{"message": null}"#, b"[1, 2]"];
        for body in bodies {
            let err = extract_message(body).unwrap_err();
            assert_eq!(err.message(), "Message cannot be empty");
        }
    }

    #[test]
    fn test_extract_message_wrong_type() {
        let err = extract_message(br#"{"message": 42}"#).unwrap_err();
        assert_eq!(err.message(), "Message must be a string");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
