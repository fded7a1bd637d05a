//! List-query normalization.

use std::collections::HashMap;

use crate::error::{ProductError, ProductResult};
use crate::models::GeneralFilter;

pub const PAGE: &str = "page";
pub const LIMIT: &str = "limit";
pub const ORDER_BY: &str = "orderBy";
pub const ORDINATION_ASC: &str = "ordinationAsc";
pub const SEARCH: &str = "search";

/// Collapse raw query pairs into a map keeping the first value of each key.
pub fn first_values<I>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut params = HashMap::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// Build a [`GeneralFilter`] from raw query parameters.
///
/// `page` and `limit` default to 0 when absent or empty and must otherwise be
/// non-negative base-10 integers. A page without a limit is rejected.
pub fn from_query(params: &HashMap<String, String>) -> ProductResult<GeneralFilter> {
    let page = parse_count(params, PAGE)?;
    let limit = parse_count(params, LIMIT)?;

    if limit == 0 && page != 0 {
        return Err(ProductError::InvalidParameter(format!(
            "{LIMIT} is required when {PAGE} is set"
        )));
    }

    Ok(GeneralFilter {
        page,
        limit,
        column: text(params, ORDER_BY),
        ordination_asc: params.get(ORDINATION_ASC).is_some_and(|v| v == "true"),
        search: text(params, SEARCH),
    })
}

fn parse_count(params: &HashMap<String, String>, key: &str) -> ProductResult<u64> {
    match params.get(key).map(String::as_str) {
        None | Some("") => Ok(0),
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ProductError::InvalidParameter(format!("{key} '{raw}': {e}"))),
    }
}

fn text(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}
