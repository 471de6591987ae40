//! PostgreSQL implementation of product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::call_context::CallContext;
use crate::domain::entities::{NewProduct, ProductChanges, ProductRecord, normalize_code};
use crate::domain::errors::ProductError;
use crate::domain::repositories::ProductRepository;
use crate::utils::db_error::map_sqlx_error;

/// PostgreSQL repository for products.
///
/// Matches codes on `LOWER(code)` against the normalized key, so lookups are
/// case- and whitespace-insensitive. Every query runs under the caller's
/// [`CallContext`] and is abandoned when it fires.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    code: String,
    title: String,
    description: String,
    reference: String,
    price_in_cents: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for ProductRecord {
    fn from(r: ProductRow) -> Self {
        Self {
            id: r.id,
            code: r.code,
            title: r.title,
            description: r.description,
            reference: r.reference,
            price_in_cents: r.price_in_cents,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(
        &self,
        ctx: &CallContext,
        new_product: NewProduct,
    ) -> Result<ProductRecord, ProductError> {
        let pool = self.pool.as_ref();

        ctx.run(|| async move {
            let row = sqlx::query_as::<_, ProductRow>(
                r#"
                INSERT INTO products (title, description, code, reference, price_in_cents)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, code, title, description, reference, price_in_cents,
                          created_at, updated_at
                "#,
            )
            .bind(new_product.title)
            .bind(new_product.description)
            .bind(new_product.code)
            .bind(new_product.reference)
            .bind(new_product.price_in_cents)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(row.into())
        })
        .await
    }

    async fn get_by_code(
        &self,
        ctx: &CallContext,
        code: &str,
    ) -> Result<ProductRecord, ProductError> {
        let key = normalize_code(code);
        let pool = self.pool.as_ref();

        ctx.run(|| async move {
            let row = sqlx::query_as::<_, ProductRow>(
                r#"
                SELECT id, code, title, description, reference, price_in_cents,
                       created_at, updated_at
                FROM products
                WHERE LOWER(code) = $1
                "#,
            )
            .bind(key)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?;

            row.map(ProductRecord::from).ok_or(ProductError::NotFound)
        })
        .await
    }

    async fn delete_by_code(&self, ctx: &CallContext, code: &str) -> Result<bool, ProductError> {
        let key = normalize_code(code);
        let pool = self.pool.as_ref();

        ctx.run(|| async move {
            let result = sqlx::query("DELETE FROM products WHERE LOWER(code) = $1")
                .bind(key)
                .execute(pool)
                .await
                .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                return Err(ProductError::NotFound);
            }
            Ok(true)
        })
        .await
    }

    async fn update(&self, ctx: &CallContext, changes: ProductChanges) -> Result<(), ProductError> {
        let key = normalize_code(&changes.code);
        let pool = self.pool.as_ref();

        ctx.run(|| async move {
            let result = sqlx::query(
                r#"
                UPDATE products SET
                    title          = $1,
                    description    = $2,
                    reference      = $3,
                    price_in_cents = $4,
                    updated_at     = NOW()
                WHERE LOWER(code) = $5
                "#,
            )
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.reference)
            .bind(changes.price_in_cents)
            .bind(key)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                return Err(ProductError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
