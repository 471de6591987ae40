//! Product repository double that returns canned answers and records calls.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, PoisonError};

use crate::domain::call_context::CallContext;
use crate::domain::entities::{NewProduct, ProductChanges, ProductRecord};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// A call received by [`SpyProductRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Insert(NewProduct),
    GetByCode(String),
    DeleteByCode(String),
    Update(ProductChanges),
}

/// Repository that answers every call the same way.
///
/// With an error configured, every data operation fails with a clone of it.
/// Otherwise `get_by_code` returns the configured record (or
/// [`ProductError::NotFound`] if none), `insert` echoes its input as a record
/// with id 1 unless a record is configured, and `update` / `delete_by_code`
/// succeed. The context is ignored, which makes the spy useful for driving
/// error paths without a real backend.
///
/// # Examples
///
/// ```
/// use product_service::domain::errors::ProductError;
/// use product_service::infrastructure::persistence::SpyProductRepository;
///
/// let spy = SpyProductRepository::new().failing_with(ProductError::DuplicateCode);
/// assert!(spy.calls().is_empty());
/// ```
#[derive(Default)]
pub struct SpyProductRepository {
    expected_error: Option<ProductError>,
    expected_record: Option<ProductRecord>,
    unhealthy: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl SpyProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every data operation fail with `error`.
    pub fn failing_with(mut self, error: ProductError) -> Self {
        self.expected_error = Some(error);
        self
    }

    /// Makes `get_by_code` and `insert` return `record`.
    pub fn returning(mut self, record: ProductRecord) -> Self {
        self.expected_record = Some(record);
        self
    }

    /// Makes `health_check` report the backend as down.
    pub fn unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), ProductError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);

        match &self.expected_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductRepository for SpyProductRepository {
    async fn insert(
        &self,
        _ctx: &CallContext,
        new_product: NewProduct,
    ) -> Result<ProductRecord, ProductError> {
        self.record(RecordedCall::Insert(new_product.clone()))?;

        if let Some(record) = &self.expected_record {
            return Ok(record.clone());
        }

        let now = Utc::now();
        Ok(ProductRecord {
            id: 1,
            code: new_product.code,
            title: new_product.title,
            description: new_product.description,
            reference: new_product.reference,
            price_in_cents: new_product.price_in_cents,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_code(
        &self,
        _ctx: &CallContext,
        code: &str,
    ) -> Result<ProductRecord, ProductError> {
        self.record(RecordedCall::GetByCode(code.to_string()))?;
        self.expected_record.clone().ok_or(ProductError::NotFound)
    }

    async fn delete_by_code(&self, _ctx: &CallContext, code: &str) -> Result<bool, ProductError> {
        self.record(RecordedCall::DeleteByCode(code.to_string()))?;
        Ok(true)
    }

    async fn update(
        &self,
        _ctx: &CallContext,
        changes: ProductChanges,
    ) -> Result<(), ProductError> {
        self.record(RecordedCall::Update(changes))
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }
}
