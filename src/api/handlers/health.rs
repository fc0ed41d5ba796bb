//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers 200 OK while the process is serving. Without a session
/// cookie the status is `degraded` and the credentials check is `warn`:
/// requests are still forwarded, the upstream will most likely refuse them.
///
/// The upstream itself is not contacted.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "credentials": { "status": "ok", "message": "Session cookie configured" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let credentials = check_credentials(&state);
    let healthy = credentials.status == "ok";

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { credentials },
    })
}

fn check_credentials(state: &AppState) -> CheckStatus {
    if state.session_configured {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Session cookie configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "warn".to_string(),
            message: Some("PRIVATE_COOKIE is not set".to_string()),
        }
    }
}
