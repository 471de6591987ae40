//! Application layer orchestrating validation and storage access.
//!
//! Use cases consume the repository trait and give HTTP handlers a small,
//! transport-free API.
//!
//! # Available Use Cases
//!
//! - [`use_cases::CreateProduct`] - Validate and insert
//! - [`use_cases::GetProduct`] - Look up by code
//! - [`use_cases::UpdateProduct`] - Validate and overwrite by code
//! - [`use_cases::DeleteProduct`] - Remove by code

pub mod use_cases;
