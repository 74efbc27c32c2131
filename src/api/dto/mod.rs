//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for (de)serialization.

pub mod health;
pub mod url;
