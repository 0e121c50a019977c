use std::sync::Arc;

use service::product::ProductService;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(products: ProductService) -> Self {
        Self { products: Arc::new(products) }
    }
}
