//! Product repository implementations.
//!
//! # Repositories
//!
//! - [`PgProductRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryProductRepository`] - In-process map with identical semantics
//! - [`SpyProductRepository`] - Canned responses and call recording for tests

pub mod in_memory_product_repository;
pub mod pg_product_repository;
pub mod spy_product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use pg_product_repository::PgProductRepository;
pub use spy_product_repository::{RecordedCall, SpyProductRepository};
