//! Client interface for the upstream link-generation service.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use bytes::Bytes;

use crate::domain::origin_url::OriginUrl;

/// Raw transport response from the upstream service.
///
/// The body has already been read in full, so dropping this value releases
/// the underlying connection on every path.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, content_type: Option<&str>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }
}

/// Why the outbound call could not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request timeout after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Upstream unreachable: {detail}")]
    NetworkUnreachable { dns: bool, detail: String },

    #[error("{0}")]
    Other(String),
}

/// Issues the shortening call to the upstream service.
///
/// Implementations perform exactly one outbound request per invocation and
/// never retry. They do not decide whether the response is a success; that
/// is left to [`crate::domain::interpreter::interpret_response`].
///
/// # Implementations
///
/// - [`crate::infrastructure::affiliate_client::AffiliateClient`] - Shopee affiliate GraphQL API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerClient: Send + Sync {
    /// Requests a short link for `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Timeout`] if no complete response arrives in time,
    /// [`TransportError::NetworkUnreachable`] on DNS or connection failure, and
    /// [`TransportError::Other`] for any other I/O or protocol fault.
    async fn request_short_link(&self, origin: &OriginUrl)
    -> Result<UpstreamResponse, TransportError>;
}
