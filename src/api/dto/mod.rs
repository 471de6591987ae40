//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Product fields
//! travel in camelCase.

pub mod health;
pub mod product;
