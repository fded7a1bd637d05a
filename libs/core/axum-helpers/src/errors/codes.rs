//! Type-safe error codes for API responses.
//!
//! Each code has a string identifier for clients, an integer for logs and
//! dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidParameter;
//! assert_eq!(code.as_str(), "INVALID_PARAMETER");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Generic malformed request
    BadRequest,

    /// Request body could not be read or decoded
    InvalidRequestBody,

    /// Path or query parameter is malformed or inconsistent
    InvalidParameter,

    /// Product payload could not be decoded or is not acceptable
    InvalidProduct,

    /// Scan payload names a code type the service does not handle
    UnsupportedCodeType,

    /// Requested resource was not found
    NotFound,

    /// Authentication credentials are missing or invalid
    Unauthorized,

    /// No route matches the request
    RouteNotFound,

    // Server errors (5000-5999)
    /// Anything the service could not classify
    Unexpected,

    /// Response body could not be serialized
    SerdeJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidRequestBody => "INVALID_REQUEST_BODY",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::InvalidProduct => "INVALID_PRODUCT",
            Self::UnsupportedCodeType => "UNSUPPORTED_CODE_TYPE",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::Unexpected => "UNEXPECTED",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::InvalidRequestBody => 1001,
            Self::InvalidParameter => 1002,
            Self::InvalidProduct => 1003,
            Self::UnsupportedCodeType => 1004,
            Self::NotFound => 1005,
            Self::Unauthorized => 1006,
            Self::RouteNotFound => 1007,
            Self::Unexpected => 5001,
            Self::SerdeJsonError => 5002,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::InvalidRequestBody => "Invalid request body",
            Self::InvalidParameter => "Invalid parameter",
            Self::InvalidProduct => "Invalid product",
            Self::UnsupportedCodeType => "Unsupported code type",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication required",
            Self::RouteNotFound => "The requested resource was not found",
            Self::Unexpected => "An unexpected error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }

    /// Whether the code describes a client-side mistake.
    pub fn is_client_error(&self) -> bool {
        self.code() < 5000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::InvalidRequestBody.as_str(), "INVALID_REQUEST_BODY");
        assert_eq!(ErrorCode::UnsupportedCodeType.as_str(), "UNSUPPORTED_CODE_TYPE");
        assert_eq!(ErrorCode::Unexpected.to_string(), "UNEXPECTED");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::InvalidParameter.code(), 1002);
        assert_eq!(ErrorCode::Unexpected.code(), 5001);
        assert!(ErrorCode::InvalidProduct.is_client_error());
        assert!(!ErrorCode::SerdeJsonError.is_client_error());
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        for code in [
            ErrorCode::InvalidRequestBody,
            ErrorCode::InvalidParameter,
            ErrorCode::InvalidProduct,
            ErrorCode::UnsupportedCodeType,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
