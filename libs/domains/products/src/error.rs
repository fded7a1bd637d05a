use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

use crate::models::ProductId;

/// HTTP-facing class of a [`ProductError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Unexpected,
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Unsupported code type: {0}")]
    UnsupportedCodeType(String),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Read product not found: {0}")]
    ReadProductNotFound(i64),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ProductError::InvalidRequestBody(_)
            | ProductError::InvalidParameter(_)
            | ProductError::InvalidProduct(_)
            | ProductError::UnsupportedCodeType(_) => ErrorClass::BadRequest,
            ProductError::NotFound(_) | ProductError::ReadProductNotFound(_) => {
                ErrorClass::NotFound
            }
            ProductError::Unexpected(_) => ErrorClass::Unexpected,
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            ProductError::InvalidRequestBody(_) => ErrorCode::InvalidRequestBody,
            ProductError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            ProductError::InvalidProduct(_) => ErrorCode::InvalidProduct,
            ProductError::UnsupportedCodeType(_) => ErrorCode::UnsupportedCodeType,
            ProductError::NotFound(_) | ProductError::ReadProductNotFound(_) => {
                ErrorCode::NotFound
            }
            ProductError::Unexpected(_) => ErrorCode::Unexpected,
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err.class() {
            ErrorClass::BadRequest => AppError::bad_request(err.code(), err.to_string()),
            ErrorClass::NotFound => AppError::NotFound(err.to_string()),
            ErrorClass::Unexpected => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_bad_request_kinds_share_a_class() {
        for err in [
            ProductError::InvalidRequestBody("eof".into()),
            ProductError::InvalidParameter("page".into()),
            ProductError::InvalidProduct("empty".into()),
            ProductError::UnsupportedCodeType("rfid".into()),
        ] {
            assert_eq!(err.class(), ErrorClass::BadRequest, "{err}");
        }
        assert_eq!(ProductError::NotFound(3).class(), ErrorClass::NotFound);
        assert_eq!(
            ProductError::Unexpected("boom".into()).class(),
            ErrorClass::Unexpected
        );
    }

    #[test]
    fn test_status_mapping() {
        let status = |err: ProductError| err.into_response().status();
        assert_eq!(
            status(ProductError::UnsupportedCodeType("rfid".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status(ProductError::NotFound(9)), StatusCode::NOT_FOUND);
        assert_eq!(
            status(ProductError::ReadProductNotFound(9)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(ProductError::Unexpected("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_keeps_distinct_codes() {
        match AppError::from(ProductError::UnsupportedCodeType("rfid".into())) {
            AppError::BadRequest { code, message } => {
                assert_eq!(code, ErrorCode::UnsupportedCodeType);
                assert_eq!(message, "Unsupported code type: rfid");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
