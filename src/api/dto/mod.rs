//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and query-string (de)serialization. Field
//! names follow the public camelCase contract.

pub mod health;
pub mod shorten;
