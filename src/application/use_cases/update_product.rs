//! Update use case.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::call_context::{CallContext, DEFAULT_CALL_TIMEOUT};
use crate::domain::entities::{Product, ProductChanges};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// Validates a product and overwrites the stored one with the same code.
///
/// The write goes straight to [`ProductRepository::update`] keyed by the
/// normalized input code. There is no prior lookup, so the outcome is decided
/// by a single statement and a missing row surfaces as
/// [`ProductError::NotFound`] from the repository.
pub struct UpdateProduct<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: ProductRepository + ?Sized> UpdateProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// # Errors
    ///
    /// Returns [`ProductError::Validation`] if the product is invalid and
    /// [`ProductError::NotFound`] if no stored product has this code.
    pub async fn execute(&self, ctx: &CallContext, product: Product) -> Result<(), ProductError> {
        if let Err(kind) = product.validate() {
            tracing::debug!(code = %product.code, error = %kind, "Rejected product on update");
            return Err(kind.into());
        }

        let ctx = ctx.with_timeout(self.timeout);
        let code = product.code.clone();

        ctx.run(|| self.repository.update(&ctx, ProductChanges::from(product)))
            .await
            .inspect_err(|e| {
                tracing::warn!(code = %code, error = %e, "Failed to update product")
            })?;

        tracing::info!(code = %code, "Product updated");
        Ok(())
    }
}
