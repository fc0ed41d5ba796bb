//! # Affiliate Shortener
//!
//! An HTTP gateway that turns a long URL into a Shopee affiliate short link by
//! calling the upstream `batchCustomLink` GraphQL API, and maps every outcome
//! onto a stable JSON contract.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL validation, upstream envelope, response interpretation
//! - **Application Layer** ([`application`]) - The shortening pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-based upstream client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET  /api/public-api?url=<origin>` → `{ "shortLink": "..." }`
//! - `POST /api/public-api` with `{ "url": "<origin>" }` → same
//! - `GET  /health`
//!
//! Failures always come back as `{ "error", "message", "statusText"? }`; see [`error`].
//!
//! ## Quick Start
//!
//! ```bash
//! export PRIVATE_COOKIE="SPC_EC=..."
//! cargo run
//! curl 'http://localhost:1995/api/public-api?url=https://shopee.vn/product/1'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::config::{Config, ShortenCredential};
    pub use crate::domain::interpreter::ShortLink;
    pub use crate::domain::origin_url::{OriginRequest, OriginUrl};
    pub use crate::domain::shortener_client::{ShortenerClient, TransportError, UpstreamResponse};
    pub use crate::error::AppError;
    pub use crate::infrastructure::affiliate_client::AffiliateClient;
    pub use crate::state::AppState;
}
