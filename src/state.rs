//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenService;

/// Read-only state built once at startup.
///
/// Cloning is cheap; all clones share the same service and HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    /// Whether a session cookie was configured. Reported by `/health`.
    pub session_configured: bool,
}

impl AppState {
    pub fn new(shorten_service: Arc<ShortenService>, session_configured: bool) -> Self {
        Self {
            shorten_service,
            session_configured,
        }
    }
}
