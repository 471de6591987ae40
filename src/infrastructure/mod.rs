//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for product storage.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL, in-memory and test repository implementations

pub mod persistence;
