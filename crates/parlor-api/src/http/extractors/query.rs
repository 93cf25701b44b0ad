//! Pagination extractor for the history endpoint.
//!
//! Parses `?limit=N&offset=M` from the request URI. Missing or blank values
//! fall back to the configured page size and zero; anything that is not a
//! non-negative integer is a 400. Values past `u32::MAX` saturate, and a
//! repeated key uses its first occurrence.

use std::num::IntErrorKind;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use parlor_types::message::Page;

use crate::http::error::AppError;
use crate::state::AppState;

/// Raw query parameters, kept as strings so bad values produce our own error.
#[derive(Debug, Default)]
pub struct HistoryQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl HistoryQuery {
    /// Collect `limit` and `offset` from decoded query pairs, first one wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = HistoryQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Resolve into a [`Page`], using `default_limit` when `limit` is absent.
    pub fn into_page(self, default_limit: u32) -> Result<Page, AppError> {
        let limit = parse_param("limit", self.limit.as_deref())?.unwrap_or(default_limit);
        let offset = parse_param("offset", self.offset.as_deref())?.unwrap_or(0);
        Ok(Page::new(limit, offset))
    }
}

fn parse_param(name: &str, raw: Option<&str>) -> Result<Option<u32>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<u32>() {
            Ok(n) => Ok(Some(n)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Some(u32::MAX)),
            Err(_) => Err(AppError::Validation(format!(
                "{name} must be a non-negative integer"
            ))),
        },
    }
}

/// Validated pagination window for `GET /api/messages`.
pub struct Pagination(pub Page);

impl FromRequestParts<AppState> for Pagination {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::Validation(format!("Invalid query string: {}", e.body_text())))?;

        let query = HistoryQuery::from_pairs(pairs);
        Ok(Pagination(query.into_page(state.default_page_size)?))
    }
}
