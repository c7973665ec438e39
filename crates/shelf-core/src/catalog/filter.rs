//! Filter predicate deciding which products survive a query.

use crate::error::Result;
use crate::models::{parse_price, FilterState, Product};

/// Decide whether a single product passes the current filter state.
///
/// A product passes iff all of:
/// - its name contains the filter text case-insensitively (empty text
///   matches every product),
/// - it is stocked, when the in-stock-only control is on,
/// - its numeric price does not exceed the price ceiling.
///
/// The category never participates in text matching; it is only used for
/// grouping and ordering.
///
/// # Errors
///
/// Returns [`crate::CatalogError::InvalidPrice`] when the product carries
/// a malformed price string.
pub fn matches(product: &Product, state: &FilterState) -> Result<bool> {
    if parse_price(&product.price)? > state.max_price() {
        return Ok(false);
    }

    if state.in_stock_only() && !product.stocked {
        return Ok(false);
    }

    let text = state.filter_text();
    if text.is_empty() {
        return Ok(true);
    }

    Ok(product
        .name
        .to_lowercase()
        .contains(&text.to_lowercase()))
}
