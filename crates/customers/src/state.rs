//! Application state shared by all request handlers.

use std::sync::Arc;

use customers_core::storage::CustomerRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is the only shared
/// resource; handlers never hold a connection of their own.
#[derive(Clone)]
pub struct AppState {
    /// Customer repository (single shared storage handle).
    pub customer_repo: Arc<dyn CustomerRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }
}
