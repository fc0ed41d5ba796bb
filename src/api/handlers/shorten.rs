//! Handlers for the link shortening endpoint.
//!
//! Both methods share [`crate::application::services::ShortenService`] and the
//! same error mapping; they differ only in where the origin URL is read from.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::api::dto::shorten::{ShortenBody, ShortenQuery, ShortenResponse};
use crate::domain::origin_url::OriginRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL given in the query string.
///
/// # Endpoint
///
/// `GET /api/public-api?url=https://shopee.vn/product/1`
///
/// # Response
///
/// ```json
/// { "shortLink": "https://s.shopee.vn/abc" }
/// ```
///
/// # Errors
///
/// - 400 `Bad Request` / `Invalid URL` / `Invalid Protocol` for bad input
/// - 400 `No short link found or token expired` when the upstream yields no link
/// - upstream status with `API Error` when the upstream call is rejected
/// - 504 `Gateway Timeout`, 404 `Not Found` when the upstream cannot be reached
/// - 500 `Internal Server Error` otherwise
pub async fn shorten_get_handler(
    State(state): State<AppState>,
    query: Result<Query<ShortenQuery>, QueryRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;

    let link = state
        .shorten_service
        .shorten(OriginRequest::from_query(query.url))
        .await?;

    Ok(Json(link.into()))
}

/// Shortens the URL given in the JSON body.
///
/// # Endpoint
///
/// `POST /api/public-api`
///
/// # Request Body
///
/// ```json
/// { "url": "https://shopee.vn/product/1" }
/// ```
///
/// # Errors
///
/// Same as [`shorten_get_handler`]. A body that is not valid JSON, or is sent
/// without a JSON content type, is a 400 `Bad Request`.
pub async fn shorten_post_handler(
    State(state): State<AppState>,
    body: Result<Json<ShortenBody>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::bad_request(e.body_text()))?;

    let link = state
        .shorten_service
        .shorten(OriginRequest::from_body(body.url))
        .await?;

    Ok(Json(link.into()))
}
