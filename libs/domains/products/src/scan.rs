//! Scan-code resolution for the read-product endpoint.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};
use crate::models::{null_as_default, ProductId};

/// Symbologies accepted by the read-product endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CodeType {
    Barcode,
    Qrcode,
}

/// Body of `POST /product/read-product`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanPayload {
    /// Encoded product id
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// `barcode` or `qrcode`
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub code_type: String,
}

impl ScanPayload {
    /// Resolve the payload to a product id without consulting storage.
    pub fn resolve(&self) -> ProductResult<ProductId> {
        if self.code.is_empty() || self.code_type.is_empty() {
            return Err(ProductError::InvalidParameter(
                "code and type are required".to_string(),
            ));
        }

        let code_type: CodeType = self
            .code_type
            .parse()
            .map_err(|_| ProductError::UnsupportedCodeType(self.code_type.clone()))?;

        // Both symbologies carry the decimal product id.
        match code_type {
            CodeType::Barcode => parse_product_id(&self.code),
            CodeType::Qrcode => parse_product_id(&self.code),
        }
    }
}

fn parse_product_id(code: &str) -> ProductResult<ProductId> {
    code.parse::<ProductId>()
        .map_err(|e| ProductError::InvalidParameter(format!("code '{code}': {e}")))
}
