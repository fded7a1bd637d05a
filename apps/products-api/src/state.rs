//! Application state management

use axum_helpers::JwtAuth;
use domain_products::InMemoryProductUseCase;

use crate::config::Config;

/// Collaborators wired into the routers at startup
pub struct AppState {
    pub auth: JwtAuth,
    pub products: InMemoryProductUseCase,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            auth: JwtAuth::new(&config.jwt),
            products: InMemoryProductUseCase::new(),
        }
    }
}
