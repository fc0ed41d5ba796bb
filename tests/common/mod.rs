#![allow(dead_code)]

use affiliate_shortener::api::handlers::health_handler;
use affiliate_shortener::api::routes::public_routes;
use affiliate_shortener::application::services::ShortenService;
use affiliate_shortener::config::ShortenCredential;
use affiliate_shortener::infrastructure::affiliate_client::AffiliateClient;
use affiliate_shortener::state::AppState;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub const UPSTREAM_PATH: &str = "/api/v3/gql";
pub const ORIGIN_URL: &str = "https://shopee.vn/product/1";
pub const SESSION_COOKIE: &str = "SPC_EC=integration-session";

pub fn credential(timeout: Duration) -> ShortenCredential {
    ShortenCredential {
        session_cookie: SESSION_COOKIE.to_string(),
        signing_header: "integration-signature".to_string(),
        timeout,
    }
}

pub fn create_test_state(upstream_url: &str, timeout: Duration) -> AppState {
    let client = AffiliateClient::new(upstream_url, credential(timeout)).unwrap();
    let shorten_service = Arc::new(ShortenService::new(Arc::new(client)));

    AppState::new(shorten_service, true)
}

pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", public_routes())
        .with_state(state)
}

/// Test server whose upstream is `upstream_uri` + [`UPSTREAM_PATH`].
pub fn create_test_server(upstream_uri: &str) -> TestServer {
    let state = create_test_state(
        &format!("{upstream_uri}{UPSTREAM_PATH}"),
        Duration::from_secs(5),
    );
    TestServer::new(test_app(state)).unwrap()
}

pub fn envelope(short_link: Option<&str>, fail_code: Option<&str>) -> Value {
    json!({
        "data": {
            "batchCustomLink": [
                { "shortLink": short_link, "longLink": ORIGIN_URL, "failCode": fail_code }
            ]
        }
    })
}
