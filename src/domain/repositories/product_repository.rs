//! Repository trait for product data access.

use async_trait::async_trait;

use crate::domain::call_context::CallContext;
use crate::domain::entities::{NewProduct, ProductChanges, ProductRecord};
use crate::domain::errors::ProductError;

/// Storage-agnostic access to products.
///
/// Lookups, updates and deletes match on the normalized code (see
/// [`crate::domain::entities::normalize_code`]). Every data operation takes a
/// [`CallContext`] and must give up with [`ProductError::Timeout`] or
/// [`ProductError::Cancelled`] once it fires.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryProductRepository`] - in-process map
/// - [`crate::infrastructure::persistence::SpyProductRepository`] - canned responses for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::DuplicateCode`] if the code is already taken.
    /// Returns [`ProductError::Storage`] on backend errors.
    async fn insert(
        &self,
        ctx: &CallContext,
        new_product: NewProduct,
    ) -> Result<ProductRecord, ProductError>;

    /// Finds a product by code, ignoring case and whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] if nothing matches.
    async fn get_by_code(
        &self,
        ctx: &CallContext,
        code: &str,
    ) -> Result<ProductRecord, ProductError>;

    /// Removes a product by code.
    ///
    /// Returns `Ok(true)` when a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] if no row was affected.
    async fn delete_by_code(&self, ctx: &CallContext, code: &str) -> Result<bool, ProductError>;

    /// Overwrites title, description, reference and price of the product
    /// matching `changes.code`. `code`, `id` and `created_at` are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] if no row was affected.
    async fn update(&self, ctx: &CallContext, changes: ProductChanges) -> Result<(), ProductError>;

    /// Returns true if the backend is reachable.
    async fn health_check(&self) -> bool;
}
