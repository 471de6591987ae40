//! In-process product repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::call_context::CallContext;
use crate::domain::entities::{NewProduct, ProductChanges, ProductRecord, normalize_code};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;

/// Map-backed repository with the same semantics as the PostgreSQL one.
///
/// Records are keyed by normalized code, ids come from a counter starting at 1,
/// and timestamps are taken from the system clock. Contents are lost when the
/// value is dropped.
pub struct InMemoryProductRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    products: HashMap<String, ProductRecord>,
}

impl Store {
    fn insert(&mut self, new_product: NewProduct) -> Result<ProductRecord, ProductError> {
        let key = normalize_code(&new_product.code);
        if self.products.contains_key(&key) {
            return Err(ProductError::DuplicateCode);
        }

        self.next_id += 1;
        let now = Utc::now();
        let record = ProductRecord {
            id: self.next_id,
            code: new_product.code,
            title: new_product.title,
            description: new_product.description,
            reference: new_product.reference,
            price_in_cents: new_product.price_in_cents,
            created_at: now,
            updated_at: now,
        };

        self.products.insert(key, record.clone());
        Ok(record)
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store::default()),
        }
    }

    /// Creates a repository pre-populated with `products`.
    ///
    /// Entries whose code collides with an earlier one are skipped.
    pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let mut store = Store::default();
        for product in products {
            if let Err(e) = store.insert(product) {
                tracing::warn!(error = %e, "Skipping seed product");
            }
        }

        Self {
            inner: RwLock::new(store),
        }
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(
        &self,
        ctx: &CallContext,
        new_product: NewProduct,
    ) -> Result<ProductRecord, ProductError> {
        ctx.check()?;
        self.inner.write().await.insert(new_product)
    }

    async fn get_by_code(
        &self,
        ctx: &CallContext,
        code: &str,
    ) -> Result<ProductRecord, ProductError> {
        ctx.check()?;
        self.inner
            .read()
            .await
            .products
            .get(&normalize_code(code))
            .cloned()
            .ok_or(ProductError::NotFound)
    }

    async fn delete_by_code(&self, ctx: &CallContext, code: &str) -> Result<bool, ProductError> {
        ctx.check()?;
        self.inner
            .write()
            .await
            .products
            .remove(&normalize_code(code))
            .map(|_| true)
            .ok_or(ProductError::NotFound)
    }

    async fn update(&self, ctx: &CallContext, changes: ProductChanges) -> Result<(), ProductError> {
        ctx.check()?;
        let mut store = self.inner.write().await;
        let record = store
            .products
            .get_mut(&normalize_code(&changes.code))
            .ok_or(ProductError::NotFound)?;

        record.title = changes.title;
        record.description = changes.description;
        record.reference = changes.reference;
        record.price_in_cents = changes.price_in_cents;
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
