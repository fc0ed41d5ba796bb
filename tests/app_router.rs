mod common;

use affiliate_shortener::api::middleware::panic;
use affiliate_shortener::routes::app_router;
use axum::Router;
use axum::body::Body;
use axum::routing::get;
use axum::http::{Request, StatusCode};
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_router_trims_trailing_slash() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(Some("https://s.shopee.vn/abc"), None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_state(&mock_server.uri(), Duration::from_secs(5));
    let app = app_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/public-api/")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "url": common::ORIGIN_URL }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["shortLink"], "https://s.shopee.vn/abc");
}

#[tokio::test]
async fn test_full_router_health() {
    let state = common::create_test_state("http://127.0.0.1:1/gql", Duration::from_secs(1));
    let app = app_router(state);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_panicking_handler_returns_json_error() {
    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    let app = Router::new()
        .route("/boom", get(explode))
        .layer(panic::layer());

    let request = Request::builder()
        .uri("/boom")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(json["message"], "handler exploded");
}
