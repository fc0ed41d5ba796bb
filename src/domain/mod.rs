//! Domain layer containing the shortening pipeline's types and pure logic.
//!
//! Nothing in here knows about axum or reqwest. Status codes are the plain
//! `http` crate types, and the upstream call is reached only through the
//! [`shortener_client::ShortenerClient`] trait.
//!
//! # Architecture
//!
//! - [`origin_url`] - Input extraction and URL validation
//! - [`shortener_client`] - Upstream client contract and transport errors
//! - [`envelope`] - Upstream GraphQL response shape
//! - [`interpreter`] - Response classification into a short link or failure
//!
//! # Shortening Flow
//!
//! 1. HTTP handler builds an [`origin_url::OriginRequest`]
//! 2. [`origin_url::validate_origin_url`] rejects missing, malformed or non-HTTP(S) input
//! 3. [`shortener_client::ShortenerClient`] performs the single upstream call
//! 4. [`interpreter::interpret_response`] extracts the short link

pub mod envelope;
pub mod interpreter;
pub mod origin_url;
pub mod shortener_client;
