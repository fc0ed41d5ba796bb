//! Outward error contract.
//!
//! Every failure leaving the service is rendered as
//!
//! ```json
//! { "error": "API Error", "message": "Target API returned status 500", "statusText": "Internal Server Error" }
//! ```
//!
//! with `statusText` present only for upstream status failures.

use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::interpreter::InterpretError;
use crate::domain::origin_url::{InputSource, UrlValidationError};
use crate::domain::shortener_client::TransportError;

const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusText", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing input or a request the framework could not parse.
    #[error("{0}")]
    BadRequest(String),

    #[error("The provided URL is not valid")]
    InvalidUrl,

    #[error("Only HTTP and HTTPS protocols are allowed")]
    InvalidProtocol,

    #[error("Target API returned status {}", .0.as_u16())]
    UpstreamStatus(StatusCode),

    #[error("Could not generate short link from API")]
    NoShortLink,

    #[error("Request timeout after {} ms", .0.as_millis())]
    GatewayTimeout(Duration),

    /// Name resolution for the upstream host failed.
    #[error("Could not reach the target URL. DNS lookup failed.")]
    Unreachable,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::InvalidUrl
            | AppError::InvalidProtocol
            | AppError::NoShortLink => StatusCode::BAD_REQUEST,
            AppError::UpstreamStatus(status) => *status,
            AppError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Unreachable => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field.
    pub fn label(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::InvalidUrl => "Invalid URL",
            AppError::InvalidProtocol => "Invalid Protocol",
            AppError::UpstreamStatus(_) => "API Error",
            AppError::NoShortLink => "No short link found or token expired",
            AppError::GatewayTimeout(_) => "Gateway Timeout",
            AppError::Unreachable => "Not Found",
            AppError::Internal(_) => "Internal Server Error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let message = match self {
            AppError::Internal(message) if message.is_empty() => FALLBACK_MESSAGE.to_string(),
            other => other.to_string(),
        };

        let status_text = match self {
            AppError::UpstreamStatus(status) => {
                Some(status.canonical_reason().unwrap_or_default().to_string())
            }
            _ => None,
        };

        ErrorBody {
            error: self.label().to_string(),
            message,
            status_text,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<UrlValidationError> for AppError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::Missing {
                input: InputSource::Query,
            } => AppError::bad_request("URL parameter is required. Usage: https://shopee.vn/"),
            UrlValidationError::Missing {
                input: InputSource::Body,
            } => AppError::bad_request("URL is required in request body"),
            UrlValidationError::Malformed(_) => AppError::InvalidUrl,
            UrlValidationError::DisallowedScheme(_) => AppError::InvalidProtocol,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(timeout) => AppError::GatewayTimeout(timeout),
            TransportError::NetworkUnreachable { dns: true, .. } => AppError::Unreachable,
            TransportError::NetworkUnreachable { dns: false, detail } => AppError::Internal(detail),
            TransportError::Other(message) => AppError::Internal(message),
        }
    }
}

impl From<InterpretError> for AppError {
    fn from(err: InterpretError) -> Self {
        match err {
            InterpretError::UpstreamStatus(status) => AppError::UpstreamStatus(status),
            InterpretError::NoShortLinkProduced => AppError::NoShortLink,
            other @ (InterpretError::UnsupportedContentType(_)
            | InterpretError::MalformedEnvelope(_)) => AppError::Internal(other.to_string()),
        }
    }
}
