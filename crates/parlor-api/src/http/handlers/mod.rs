//! HTTP request handlers for the chat API.

pub mod message;

use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::http::error::AppError;

/// Fallback for unmatched paths and methods.
///
/// OPTIONS always succeeds with an empty body so CORS preflights work on any
/// path; everything else is a JSON 404.
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")]).into_response();
    }
    AppError::NotFound.into_response()
}
