//! Create use case.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::call_context::{CallContext, DEFAULT_CALL_TIMEOUT};
use crate::domain::entities::{NewProduct, Product};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProduct {
    pub id: i64,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

/// Validates a product and stores it.
pub struct CreateProduct<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: ProductRepository + ?Sized> CreateProduct<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Overrides the deadline ceiling applied to the repository call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the use case.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Validation`] before touching storage if the
    /// product is invalid. Repository errors, including
    /// [`ProductError::DuplicateCode`], are returned unchanged.
    pub async fn execute(
        &self,
        ctx: &CallContext,
        product: Product,
    ) -> Result<CreatedProduct, ProductError> {
        if let Err(kind) = product.validate() {
            tracing::debug!(code = %product.code, error = %kind, "Rejected product on create");
            return Err(kind.into());
        }

        let ctx = ctx.with_timeout(self.timeout);
        let code = product.code.clone();

        let record = ctx
            .run(|| self.repository.insert(&ctx, NewProduct::from(product)))
            .await
            .inspect_err(|e| {
                tracing::warn!(code = %code, error = %e, "Failed to create product")
            })?;

        tracing::info!(id = record.id, code = %record.code, "Product created");

        Ok(CreatedProduct {
            id: record.id,
            reference: record.reference,
            created_at: record.created_at,
        })
    }
}
