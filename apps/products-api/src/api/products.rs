//! Products API routes

use axum::{middleware, Router};
use axum_helpers::jwt_auth_middleware;
use domain_products::{handlers, BASE_PATH};

use crate::state::AppState;

/// Create the authenticated products router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(BASE_PATH, handlers::router(state.products))
        .layer(middleware::from_fn_with_state(state.auth, jwt_auth_middleware))
}
