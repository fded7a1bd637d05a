//! API routes module

pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes; nested under `/api` by `create_router`
pub fn routes(state: AppState) -> Router {
    Router::new().merge(products::router(state))
}
