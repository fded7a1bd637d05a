use async_trait::async_trait;
use axum_helpers::Principal;

use crate::error::ProductResult;
use crate::models::{GeneralFilter, Page, Product, ProductId, ReadProduct};

/// Business operations behind the product endpoints.
///
/// Every call receives the authenticated [`Principal`] explicitly.
/// Implementations classify their failures as [`crate::ProductError`]; the
/// HTTP layer forwards them unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductUseCase: Send + Sync {
    /// Store a new product and return its assigned id
    async fn create_product(&self, principal: &Principal, product: Product)
        -> ProductResult<ProductId>;

    /// List products matching a filter
    async fn list_products(
        &self,
        principal: &Principal,
        filter: GeneralFilter,
    ) -> ProductResult<Page<Product>>;

    /// Get a product by ID
    async fn get_product_by_id(&self, principal: &Principal, id: ProductId)
        -> ProductResult<Product>;

    /// Replace the attributes of the product identified by `product.id`
    async fn edit_product(&self, principal: &Principal, product: Product) -> ProductResult<()>;

    /// Delete a product by ID
    async fn delete_product(&self, principal: &Principal, id: ProductId) -> ProductResult<()>;

    /// Record that the principal scanned the given product
    async fn record_read(&self, principal: &Principal, product_id: ProductId)
        -> ProductResult<()>;

    /// Delete a read record by its own ID
    async fn delete_read_product(&self, principal: &Principal, id: i64) -> ProductResult<()>;

    /// List read records matching a filter
    async fn list_read_products(
        &self,
        principal: &Principal,
        filter: GeneralFilter,
    ) -> ProductResult<Page<ReadProduct>>;
}
