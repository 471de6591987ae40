//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::use_cases::ProductUseCases;
use crate::domain::call_context::CallContext;
use crate::domain::repositories::ProductRepository;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductUseCases<dyn ProductRepository>>,
    /// Backend handle kept for health checks.
    pub repository: Arc<dyn ProductRepository>,
    /// Cancelled on shutdown; every request context is a child of it.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Wires the use cases to `repository` with the given deadline ceiling.
    pub fn new(repository: Arc<dyn ProductRepository>, timeout: Duration) -> Self {
        Self {
            products: Arc::new(ProductUseCases::new(repository.clone(), timeout)),
            repository,
            shutdown: CancellationToken::new(),
        }
    }

    /// Replaces the shutdown token, typically with one owned by the server.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Fresh context for one request.
    pub fn request_context(&self) -> CallContext {
        CallContext::from_token(self.shutdown.child_token())
    }
}
