//! DTOs for the product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::CreatedProduct;
use crate::domain::entities::{Product, ProductRecord};

/// Request body for `POST /api/v1/products` and `PATCH /api/v1/products`.
///
/// Absent fields decode as empty strings or zero and are then rejected by
/// product validation rather than by the decoder.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRequest {
    pub title: String,
    pub description: String,
    pub code: String,
    pub reference: String,
    pub price_in_cents: i64,
}

impl From<ProductRequest> for Product {
    fn from(r: ProductRequest) -> Self {
        Self {
            code: r.code,
            title: r.title,
            description: r.description,
            reference: r.reference,
            price_in_cents: r.price_in_cents,
        }
    }
}

/// Response body for a successful create (`201 Created`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProductResponse {
    pub id: i64,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

impl From<CreatedProduct> for CreatedProductResponse {
    fn from(c: CreatedProduct) -> Self {
        Self {
            id: c.id,
            reference: c.reference,
            created_at: c.created_at,
        }
    }
}

/// A stored product as returned by `GET /api/v1/products/{code}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub reference: String,
    pub price_in_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(r: ProductRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            code: r.code,
            reference: r.reference,
            price_in_cents: r.price_in_cents,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
