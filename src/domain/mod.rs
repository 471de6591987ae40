//! Domain layer containing business entities and contracts.
//!
//! Nothing here depends on the HTTP layer or on a concrete storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Product data structures and validation rules
//! - [`errors`] - Validation and repository error kinds
//! - [`repositories`] - Data access trait definitions
//! - [`call_context`] - Deadline and cancellation signal for every call
//!
//! # Request Flow
//!
//! 1. HTTP handler decodes the request into a [`entities::Product`] or a code
//! 2. A use case in [`crate::application::use_cases`] validates the product
//! 3. The use case calls [`repositories::ProductRepository`] under a bounded
//!    [`call_context::CallContext`]
//! 4. Errors travel back unchanged and are classified by [`crate::error`]

pub mod call_context;
pub mod entities;
pub mod errors;
pub mod repositories;
