//! API route configuration.

use crate::api::handlers::{shorten_get_handler, shorten_post_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /public-api?url=...` - Shorten the URL from the query string
/// - `POST /public-api`         - Shorten the URL from the JSON body
///
/// Other methods get the framework's default `405 Method Not Allowed`.
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/public-api",
        get(shorten_get_handler).post(shorten_post_handler),
    )
}
