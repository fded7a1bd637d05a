use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;
use tracing::error;

use crate::error::{ProductError, ProductResult};
use crate::models::SuccessfulRequest;

/// What a successful operation writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The value returned by the use case
    Payload,
    /// `{"success": true}`; the returned value is discarded
    Ack,
}

/// Serialize a successful result as a 200 JSON response.
///
/// The business operation has already happened when this runs, so a
/// serialization failure is reported as `Unexpected` without any rollback.
pub fn encode<T: Serialize>(operation: &str, shape: Shape, value: T) -> ProductResult<Response> {
    let bytes = match shape {
        Shape::Payload => serde_json::to_vec(&value),
        Shape::Ack => serde_json::to_vec(&SuccessfulRequest::ACK),
    }
    .map_err(|e| {
        error!(operation, error = %e, "Failed to encode response after successful operation");
        ProductError::Unexpected(format!("encode {operation} response: {e}"))
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}
