//! HTTP/JSON API layer for Parlor.
//!
//! Axum-based API exposing `POST /api/message` and `GET /api/messages`, with
//! open CORS and per-request logging.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
