//! Handlers for product endpoints (create, get, update, delete).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::product::{CreatedProductResponse, ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/v1/products`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "XXCC",
///   "title": "Toy",
///   "description": "Description",
///   "reference": "XZsdf5tY-AA",
///   "priceInCents": 2500
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: `{"id", "reference", "createdAt"}`
/// - **400 Bad Request**: Malformed JSON or a failed validation rule
/// - **409 Conflict**: Code already in use
/// - **500 Internal Server Error**: Storage fault, timeout or shutdown
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProductResponse>), AppError> {
    let Json(request) = payload?;
    let ctx = state.request_context();

    let created = state.products.create.execute(&ctx, request.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Returns one product by code.
///
/// # Endpoint
///
/// `GET /api/v1/products/{code}`
///
/// The code is matched ignoring case and whitespace.
///
/// # Errors
///
/// - **404 Not Found**: No product with this code
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(code) = path?;
    let ctx = state.request_context();

    let record = state.products.get.execute(&ctx, &code).await?;

    Ok(Json(record.into()))
}

/// Replaces the mutable fields of an existing product.
///
/// # Endpoint
///
/// `PATCH /api/v1/products`
///
/// Same body as create; `code` selects the product and is never changed.
/// Responds `200 OK` with an empty body.
pub async fn update_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    let ctx = state.request_context();

    state.products.update.execute(&ctx, request.into()).await?;

    Ok(StatusCode::OK)
}

/// Deletes a product by code.
///
/// # Endpoint
///
/// `DELETE /api/v1/products/{code}`
///
/// Responds `200 OK` with an empty body, or 404 if the code is unknown.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(code) = path?;
    let ctx = state.request_context();

    state.products.delete.execute(&ctx, &code).await?;

    Ok(StatusCode::OK)
}
