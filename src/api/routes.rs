//! API route configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, update_product_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned product routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST   /v1/products`         - Create a product
/// - `PATCH  /v1/products`         - Update a product's mutable fields
/// - `GET    /v1/products/{code}`  - Fetch a product by code
/// - `DELETE /v1/products/{code}`  - Delete a product by code
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/products",
            post(create_product_handler).patch(update_product_handler),
        )
        .route(
            "/v1/products/{code}",
            get(get_product_handler).delete(delete_product_handler),
        )
}
