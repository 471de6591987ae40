//! Get use case.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::call_context::{CallContext, DEFAULT_CALL_TIMEOUT};
use crate::domain::entities::ProductRecord;
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// Looks a product up by code.
pub struct GetProduct<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: ProductRepository + ?Sized> GetProduct<R> {
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
    /// Returns [`ProductError::NotFound`] if no product matches `code`.
    pub async fn execute(
        &self,
        ctx: &CallContext,
        code: &str,
    ) -> Result<ProductRecord, ProductError> {
        let ctx = ctx.with_timeout(self.timeout);

        ctx.run(|| self.repository.get_by_code(&ctx, code))
            .await
            .inspect_err(|e| tracing::warn!(code, error = %e, "Failed to get product"))
    }
}
