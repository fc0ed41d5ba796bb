//! Origin URL to short link pipeline.

use std::sync::Arc;

use crate::domain::interpreter::{ShortLink, interpret_response};
use crate::domain::origin_url::OriginRequest;
use crate::domain::shortener_client::ShortenerClient;
use crate::error::AppError;

/// Service shared by the GET and POST entry points.
///
/// Validates the origin URL, performs one upstream call and interprets the
/// response. Nothing is cached: identical requests reach the upstream each time.
pub struct ShortenService {
    client: Arc<dyn ShortenerClient>,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(client: Arc<dyn ShortenerClient>) -> Self {
        Self { client }
    }

    /// Produces a short link for the requested origin URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`], [`AppError::InvalidUrl`] or
    /// [`AppError::InvalidProtocol`] without contacting the upstream when the
    /// input is rejected. Upstream and transport failures are converted as
    /// described in [`crate::error`].
    pub async fn shorten(&self, request: OriginRequest) -> Result<ShortLink, AppError> {
        let origin = request.validate()?;

        tracing::info!(url = %origin, "Fetching short link");

        let response = self
            .client
            .request_short_link(&origin)
            .await
            .inspect_err(|e| tracing::warn!(url = %origin, error = %e, "Upstream call failed"))?;

        let link = interpret_response(response)
            .inspect_err(|e| tracing::warn!(url = %origin, error = %e, "Upstream response rejected"))?;

        tracing::info!(url = %origin, short_link = link.as_str(), "Short link created");

        Ok(link)
    }
}
