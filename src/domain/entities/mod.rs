//! Core domain entities.
//!
//! - [`Product`] - Candidate product fields, validated per request
//! - [`ProductRecord`] - The stored product with storage-assigned id and timestamps
//! - [`NewProduct`] / [`ProductChanges`] - Repository inputs for insert and update

pub mod product;

pub use product::{NewProduct, Product, ProductChanges, ProductRecord, normalize_code};
