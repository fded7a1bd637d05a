use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub type ProductId = i64;

/// Read a JSON `null` as the type's default (`0`, `""`).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product record: a server-assigned id plus business attributes that this
/// layer passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier; ignored on create
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ProductId,
    /// Business attributes (name, price, barcode, ...)
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { id: 0, attributes }
    }

    /// Case-insensitive substring match over string attribute values.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.attributes.values().any(|value| match value {
            Value::String(s) => s.to_lowercase().contains(&needle),
            Value::Number(n) => n.to_string().contains(&needle),
            _ => false,
        })
    }
}

/// A product lookup recorded through the scan endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadProduct {
    pub id: i64,
    pub product_id: ProductId,
    /// Subject of the principal that scanned the product
    pub read_by: String,
    pub read_at: DateTime<Utc>,
}

/// Validated list query. See [`crate::filter::from_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralFilter {
    pub page: u64,
    pub limit: u64,
    /// Sort key; empty means no explicit order
    pub column: String,
    pub ordination_asc: bool,
    pub search: String,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records matching the filter before pagination
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// Acknowledgement body for operations without a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessfulRequest {
    pub success: bool,
}

impl SuccessfulRequest {
    pub const ACK: SuccessfulRequest = SuccessfulRequest { success: true };
}
