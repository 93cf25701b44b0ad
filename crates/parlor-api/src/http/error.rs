//! Application error type mapping to HTTP status codes and the
//! `{"error": "..."}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parlor_types::error::ChatError;

use crate::http::response::ErrorBody;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Request body is not valid JSON.
    InvalidJson,
    /// Request is well-formed but its content is rejected.
    Validation(String),
    /// No route for this path/method.
    NotFound,
    /// An axum extractor rejected the request (e.g. body too large).
    Rejected(StatusCode, String),
    /// Storage or other unexpected failure.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::EmptyMessage => AppError::Validation(e.to_string()),
            ChatError::Storage(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Rejected(status, _) => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::InvalidJson => "Invalid JSON".to_string(),
            AppError::NotFound => "Not found".to_string(),
            AppError::Validation(msg) | AppError::Rejected(_, msg) | AppError::Internal(msg) => {
                msg.clone()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "Request failed");
        }

        (status, Json(ErrorBody::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_types::error::RepositoryError;

    #[test]
    fn test_chat_errors_map_to_status() {
        let empty: AppError = ChatError::EmptyMessage.into();
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
        assert_eq!(empty.message(), "Message cannot be empty");

        let storage: AppError = ChatError::Storage(RepositoryError::Query("locked".into())).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.message(), "query error: locked");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(AppError::InvalidJson.message(), "Invalid JSON");
        assert_eq!(AppError::NotFound.message(), "Not found");
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
