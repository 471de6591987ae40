//! Delete use case.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::call_context::{CallContext, DEFAULT_CALL_TIMEOUT};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// Removes a product by code.
pub struct DeleteProduct<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: ProductRepository + ?Sized> DeleteProduct<R> {
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

    /// Returns `Ok(true)` when the product was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] if no product matches `code`.
    pub async fn execute(&self, ctx: &CallContext, code: &str) -> Result<bool, ProductError> {
        let ctx = ctx.with_timeout(self.timeout);

        let deleted = ctx
            .run(|| self.repository.delete_by_code(&ctx, code))
            .await
            .inspect_err(|e| tracing::warn!(code, error = %e, "Failed to delete product"))?;

        tracing::info!(code, deleted, "Product deleted");
        Ok(deleted)
    }
}
