//! Product use cases.
//!
//! Each use case validates its input (create and update), derives a bounded
//! [`CallContext`](crate::domain::call_context::CallContext) from the caller's,
//! and makes exactly one repository call.
//! Errors are returned unchanged.

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod update_product;

pub use create_product::{CreateProduct, CreatedProduct};
pub use delete_product::DeleteProduct;
pub use get_product::GetProduct;
pub use update_product::UpdateProduct;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::ProductRepository;

/// The four product use cases wired to one repository.
pub struct ProductUseCases<R: ProductRepository + ?Sized> {
    pub create: CreateProduct<R>,
    pub get: GetProduct<R>,
    pub update: UpdateProduct<R>,
    pub delete: DeleteProduct<R>,
}

impl<R: ProductRepository + ?Sized> ProductUseCases<R> {
    /// Builds all use cases with the same deadline ceiling.
    pub fn new(repository: Arc<R>, timeout: Duration) -> Self {
        Self {
            create: CreateProduct::new(repository.clone()).with_timeout(timeout),
            get: GetProduct::new(repository.clone()).with_timeout(timeout),
            update: UpdateProduct::new(repository.clone()).with_timeout(timeout),
            delete: DeleteProduct::new(repository).with_timeout(timeout),
        }
    }
}
