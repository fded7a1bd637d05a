//! Products Domain
//!
//! HTTP surface for product records and the product-read log.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← decode path/query/body, dispatch, encode
//! └──────┬──────┘
//!        │  filter::from_query / ScanPayload::resolve
//! ┌──────▼──────┐
//! │  Use case   │  ← ProductUseCase (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ReadProduct, GeneralFilter, Page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductUseCase};
//!
//! // Requires a `Principal` in request extensions, normally inserted by
//! // `axum_helpers::jwt_auth_middleware`.
//! let router = axum::Router::new()
//!     .nest(handlers::BASE_PATH, handlers::router(InMemoryProductUseCase::new()));
//! ```

pub mod error;
pub mod filter;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod response;
pub mod scan;
pub mod usecase;

// Re-export commonly used types
pub use error::{ErrorClass, ProductError, ProductResult};
pub use handlers::{ApiDoc, BASE_PATH};
pub use memory::InMemoryProductUseCase;
pub use models::{GeneralFilter, Page, Product, ProductId, ReadProduct, SuccessfulRequest};
pub use scan::{CodeType, ScanPayload};
pub use usecase::ProductUseCase;
