//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/message`, `GET /api/messages`. Every other path or
//! method falls through to a JSON 404 (OPTIONS excepted).
//! Middleware: CORS, request logging, tracing.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/message",
            post(handlers::message::post_message).fallback(handlers::fallback),
        )
        .route(
            "/api/messages",
            get(handlers::message::list_messages)
                .head(handlers::fallback)
                .fallback(handlers::fallback),
        )
        .fallback(handlers::fallback)
        .layer(middleware::from_fn(crate::http::middleware::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // CorsLayer only advertises methods/headers on preflights; plain
        // responses carry them too.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(state)
}
