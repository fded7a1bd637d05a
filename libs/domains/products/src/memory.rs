//! In-process [`ProductUseCase`] backed by ordered maps.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use axum_helpers::Principal;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{GeneralFilter, Page, Product, ProductId, ReadProduct};
use crate::usecase::ProductUseCase;

#[derive(Debug)]
struct Catalog {
    products: BTreeMap<ProductId, Product>,
    reads: BTreeMap<i64, ReadProduct>,
    next_product_id: ProductId,
    next_read_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            reads: BTreeMap::new(),
            next_product_id: 1,
            next_read_id: 1,
        }
    }
}

/// Use case that keeps products and read records in memory.
///
/// Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProductUseCase {
    catalog: RwLock<Catalog>,
}

impl InMemoryProductUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub async fn product_count(&self) -> usize {
        self.catalog.read().await.products.len()
    }

    /// Number of stored read records
    pub async fn read_count(&self) -> usize {
        self.catalog.read().await.reads.len()
    }
}

#[async_trait]
impl ProductUseCase for InMemoryProductUseCase {
    #[instrument(skip(self, principal, product), fields(user = %principal.id))]
    async fn create_product(
        &self,
        principal: &Principal,
        product: Product,
    ) -> ProductResult<ProductId> {
        require_attributes(&product)?;

        let mut catalog = self.catalog.write().await;
        let id = catalog.next_product_id;
        catalog.next_product_id += 1;
        catalog.products.insert(id, Product { id, ..product });

        debug!(product_id = id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn list_products(
        &self,
        principal: &Principal,
        filter: GeneralFilter,
    ) -> ProductResult<Page<Product>> {
        let catalog = self.catalog.read().await;
        let mut items: Vec<Product> = catalog
            .products
            .values()
            .filter(|p| filter.search.is_empty() || p.matches(&filter.search))
            .cloned()
            .collect();

        let column = filter.column.as_str();
        items.sort_by(|a, b| match column {
            "" | "id" => a.id.cmp(&b.id),
            attr => compare_values(a.attributes.get(attr), b.attributes.get(attr))
                .then(a.id.cmp(&b.id)),
        });

        Ok(paginate(items, &filter))
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn get_product_by_id(
        &self,
        principal: &Principal,
        id: ProductId,
    ) -> ProductResult<Product> {
        self.catalog
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(
        skip(self, principal, product),
        fields(user = %principal.id, product_id = product.id)
    )]
    async fn edit_product(&self, principal: &Principal, product: Product) -> ProductResult<()> {
        require_attributes(&product)?;

        let mut catalog = self.catalog.write().await;
        let stored = catalog
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        stored.attributes = product.attributes;
        Ok(())
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn delete_product(&self, principal: &Principal, id: ProductId) -> ProductResult<()> {
        self.catalog
            .write()
            .await
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn record_read(&self, principal: &Principal, product_id: ProductId) -> ProductResult<()> {
        let mut catalog = self.catalog.write().await;
        if !catalog.products.contains_key(&product_id) {
            return Err(ProductError::NotFound(product_id));
        }

        let id = catalog.next_read_id;
        catalog.next_read_id += 1;
        catalog.reads.insert(
            id,
            ReadProduct {
                id,
                product_id,
                read_by: principal.id.clone(),
                read_at: Utc::now(),
            },
        );

        debug!(read_id = id, "Product read recorded");
        Ok(())
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn delete_read_product(&self, principal: &Principal, id: i64) -> ProductResult<()> {
        self.catalog
            .write()
            .await
            .reads
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductError::ReadProductNotFound(id))
    }

    #[instrument(skip(self, principal), fields(user = %principal.id))]
    async fn list_read_products(
        &self,
        principal: &Principal,
        filter: GeneralFilter,
    ) -> ProductResult<Page<ReadProduct>> {
        let key: fn(&ReadProduct, &ReadProduct) -> Ordering = match filter.column.as_str() {
            "" | "id" => |a, b| a.id.cmp(&b.id),
            "productId" => |a, b| a.product_id.cmp(&b.product_id).then(a.id.cmp(&b.id)),
            "readAt" => |a, b| a.read_at.cmp(&b.read_at).then(a.id.cmp(&b.id)),
            "readBy" => |a, b| a.read_by.cmp(&b.read_by).then(a.id.cmp(&b.id)),
            other => {
                return Err(ProductError::InvalidParameter(format!(
                    "unknown orderBy column '{other}'"
                )));
            }
        };

        let needle = filter.search.to_lowercase();
        let mut items: Vec<ReadProduct> = self
            .catalog
            .read()
            .await
            .reads
            .values()
            .filter(|r| {
                needle.is_empty()
                    || r.read_by.to_lowercase().contains(&needle)
                    || r.product_id.to_string().contains(&needle)
            })
            .cloned()
            .collect();
        items.sort_by(key);

        Ok(paginate(items, &filter))
    }
}

fn require_attributes(product: &Product) -> ProductResult<()> {
    if product.attributes.is_empty() {
        return Err(ProductError::InvalidProduct(
            "product has no attributes".to_string(),
        ));
    }
    Ok(())
}

/// Apply direction and paging to items already sorted ascending.
fn paginate<T>(mut items: Vec<T>, filter: &GeneralFilter) -> Page<T> {
    if !filter.ordination_asc {
        items.reverse();
    }

    let total = items.len() as u64;
    if filter.limit > 0 {
        let offset = filter.page.saturating_mul(filter.limit);
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.limit).unwrap_or(usize::MAX);
        items = items.into_iter().skip(offset).take(limit).collect();
    }

    Page {
        items,
        total,
        page: filter.page,
        limit: filter.limit,
    }
}

/// Missing < null < bool < number < string < array/object.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Number(_)) => 3,
            Some(Value::String(_)) => 4,
            Some(_) => 5,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
