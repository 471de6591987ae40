#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use product_service::domain::call_context::CallContext;
use product_service::domain::entities::{NewProduct, ProductChanges, ProductRecord};
use product_service::domain::errors::ProductError;
use product_service::domain::repositories::ProductRepository;
use product_service::infrastructure::persistence::InMemoryProductRepository;
use product_service::routes::router;
use product_service::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn sample_product(code: &str) -> NewProduct {
    NewProduct {
        code: code.to_string(),
        title: "Toy".to_string(),
        description: "Description".to_string(),
        reference: "XZsdf5tY-AA".to_string(),
        price_in_cents: 2500,
    }
}

pub fn create_test_state(repository: Arc<dyn ProductRepository>) -> AppState {
    AppState::new(repository, TEST_TIMEOUT)
}

/// State over an in-memory store seeded with `codes`.
pub fn create_seeded_state(codes: &[&str]) -> AppState {
    let repository =
        InMemoryProductRepository::with_products(codes.iter().map(|c| sample_product(c)));
    create_test_state(Arc::new(repository))
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Backend that sleeps far past any test deadline before answering.
pub struct StalledRepository;

#[async_trait]
impl ProductRepository for StalledRepository {
    async fn insert(
        &self,
        _ctx: &CallContext,
        _new_product: NewProduct,
    ) -> Result<ProductRecord, ProductError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(ProductError::Storage("unreachable".to_string()))
    }

    async fn get_by_code(
        &self,
        _ctx: &CallContext,
        _code: &str,
    ) -> Result<ProductRecord, ProductError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(ProductError::NotFound)
    }

    async fn delete_by_code(&self, _ctx: &CallContext, _code: &str) -> Result<bool, ProductError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(true)
    }

    async fn update(
        &self,
        _ctx: &CallContext,
        _changes: ProductChanges,
    ) -> Result<(), ProductError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
