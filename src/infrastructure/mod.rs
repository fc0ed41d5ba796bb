//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`affiliate_client`] - Shopee affiliate GraphQL client built on reqwest

pub mod affiliate_client;
