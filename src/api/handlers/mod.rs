//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod shorten;

pub use health::health_handler;
pub use shorten::{shorten_get_handler, shorten_post_handler};
