//! Application layer services implementing the shortening pipeline.
//!
//! Services tie domain validation, the upstream client and response
//! interpretation together and expose a single call to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Origin URL to short link

pub mod services;
