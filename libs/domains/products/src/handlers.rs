//! HTTP handlers for the Products API

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, NotFoundResponse, UnauthorizedResponse, UnexpectedErrorResponse,
    },
    Principal,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, instrument, warn};
use utoipa::OpenApi;

use crate::error::{ErrorClass, ProductError, ProductResult};
use crate::filter;
use crate::models::{GeneralFilter, Page, Product, ProductId, ReadProduct, SuccessfulRequest};
use crate::response::{encode, Shape};
use crate::scan::ScanPayload;
use crate::usecase::ProductUseCase;

/// Raw query string pairs, in request order.
type QueryPairs = Vec<(String, String)>;

/// Prefix the product routes are mounted under.
pub const BASE_PATH: &str = "/product";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
        read_product,
        delete_read_product,
        list_read_products,
    ),
    components(
        schemas(Product, ReadProduct, GeneralFilter, ScanPayload, SuccessfulRequest),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            NotFoundResponse,
            UnexpectedErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product and product-read endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router. Expects a [`Principal`] in request extensions.
pub fn router<U: ProductUseCase + 'static>(use_case: U) -> Router {
    let shared = Arc::new(use_case);

    Router::new()
        .route("/create", post(create_product::<U>))
        .route("/list", get(list_products::<U>))
        .route("/get/{product_id}", get(get_product::<U>))
        .route("/update/{product_id}", post(update_product::<U>))
        .route("/delete/{product_id}", delete(delete_product::<U>))
        .route("/read-product", post(read_product::<U>))
        .route(
            "/read-product/delete/{product_id}",
            post(delete_read_product::<U>),
        )
        .route("/list/read-product", get(list_read_products::<U>))
        .with_state(shared)
}

/// Run one operation: fail fast on a decode error, otherwise invoke the use
/// case exactly once and encode its result in the requested shape.
#[instrument(skip_all, fields(operation = operation))]
async fn dispatch<I, T, F, Fut>(
    operation: &'static str,
    shape: Shape,
    input: ProductResult<I>,
    call: F,
) -> Response
where
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = ProductResult<T>>,
    T: Serialize,
{
    let input = match input {
        Ok(input) => input,
        Err(err) => {
            warn!(operation, error = %err, "Rejected request input");
            return err.into_response();
        }
    };

    let result = match call(input).await {
        Ok(value) => encode(operation, shape, value),
        Err(err) => {
            match err.class() {
                ErrorClass::Unexpected => error!(operation, error = %err, "Operation failed"),
                ErrorClass::BadRequest | ErrorClass::NotFound => {
                    warn!(operation, error = %err, "Operation rejected")
                }
            }
            Err(err)
        }
    };

    result.into_response()
}

fn decode_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
    kind: fn(String) -> ProductError,
) -> ProductResult<T> {
    let bytes = body.map_err(|e| kind(e.body_text()))?;
    serde_json::from_slice(&bytes).map_err(|e| kind(e.to_string()))
}

fn decode_path_id(
    raw: Result<Path<String>, PathRejection>,
    kind: fn(String) -> ProductError,
) -> ProductResult<ProductId> {
    let Path(raw) = raw.map_err(|e| kind(e.body_text()))?;
    raw.parse::<ProductId>()
        .map_err(|e| kind(format!("product id '{raw}': {e}")))
}

fn decode_filter(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ProductResult<GeneralFilter> {
    let Query(pairs) = query.map_err(|e| ProductError::InvalidParameter(e.body_text()))?;
    filter::from_query(&filter::first_values(pairs))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/create",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Id of the created product", body = i64),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn create_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let input = decode_body::<Product>(body, ProductError::InvalidRequestBody);
    dispatch("create_product", Shape::Payload, input, move |product| async move {
        use_case.create_product(&principal, product).await
    })
    .await
}

/// List products
#[utoipa::path(
    get,
    path = "/list",
    tag = "Products",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page; requires limit"),
        ("limit" = Option<u64>, Query, description = "Page size; 0 returns everything"),
        ("orderBy" = Option<String>, Query, description = "Sort column"),
        ("ordinationAsc" = Option<bool>, Query, description = "Ascending only when exactly `true`"),
        ("search" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Page of products", body = Page<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn list_products<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let input = decode_filter(query);
    dispatch("list_products", Shape::Payload, input, move |filter| async move {
        use_case.list_products(&principal, filter).await
    })
    .await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/get/{product_id}",
    tag = "Products",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn get_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let input = decode_path_id(path, ProductError::Unexpected);
    dispatch("get_product", Shape::Payload, input, move |id| async move {
        use_case.get_product_by_id(&principal, id).await
    })
    .await
}

/// Update a product; the path id replaces any id in the body
#[utoipa::path(
    post,
    path = "/update/{product_id}",
    tag = "Products",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = SuccessfulRequest),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn update_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    // Body first: a request bad in both places reports the body.
    let input = decode_body::<Product>(body, ProductError::InvalidProduct).and_then(|product| {
        let id = decode_path_id(path, ProductError::InvalidParameter)?;
        Ok(Product { id, ..product })
    });
    dispatch("update_product", Shape::Ack, input, move |product| async move {
        use_case.edit_product(&principal, product).await
    })
    .await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/delete/{product_id}",
    tag = "Products",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = SuccessfulRequest),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn delete_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let input = decode_path_id(path, ProductError::Unexpected);
    dispatch("delete_product", Shape::Ack, input, move |id| async move {
        use_case.delete_product(&principal, id).await
    })
    .await
}

/// Record a product read from a barcode or QR code
#[utoipa::path(
    post,
    path = "/read-product",
    tag = "Products",
    request_body = ScanPayload,
    responses(
        (status = 200, description = "Read recorded", body = SuccessfulRequest),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn read_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let input = decode_body::<ScanPayload>(body, ProductError::InvalidRequestBody)
        .and_then(|payload| payload.resolve());
    dispatch("read_product", Shape::Ack, input, move |product_id| async move {
        use_case.record_read(&principal, product_id).await
    })
    .await
}

/// Delete a read record
#[utoipa::path(
    post,
    path = "/read-product/delete/{product_id}",
    tag = "Products",
    params(
        ("product_id" = i64, Path, description = "Read record ID")
    ),
    responses(
        (status = 200, description = "Read record deleted", body = SuccessfulRequest),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn delete_read_product<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let input = decode_path_id(path, ProductError::Unexpected);
    dispatch("delete_read_product", Shape::Ack, input, move |id| async move {
        use_case.delete_read_product(&principal, id).await
    })
    .await
}

/// List read records
#[utoipa::path(
    get,
    path = "/list/read-product",
    tag = "Products",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page; requires limit"),
        ("limit" = Option<u64>, Query, description = "Page size; 0 returns everything"),
        ("orderBy" = Option<String>, Query, description = "id, productId, readAt or readBy"),
        ("ordinationAsc" = Option<bool>, Query, description = "Ascending only when exactly `true`"),
        ("search" = Option<String>, Query, description = "Matches reader or product id")
    ),
    responses(
        (status = 200, description = "Page of read records", body = Page<ReadProduct>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = UnexpectedErrorResponse)
    )
)]
async fn list_read_products<U: ProductUseCase>(
    State(use_case): State<Arc<U>>,
    principal: Principal,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let input = decode_filter(query);
    dispatch("list_read_products", Shape::Payload, input, move |filter| async move {
        use_case.list_read_products(&principal, filter).await
    })
    .await
}
