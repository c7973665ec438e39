//! Price string parsing.

use crate::error::{CatalogError, Result};

/// Parse a currency-formatted price string into its numeric value.
///
/// Strips a single leading `$` and parses the remainder as a float. No
/// locale or thousands-separator handling is performed.
///
/// Malformed input is an explicit error rather than a silent non-numeric
/// sentinel, so a bad catalog record surfaces at the call site instead of
/// producing undefined ordering downstream.
///
/// # Examples
///
/// ```rust
/// use shelf_core::parse_price;
///
/// assert_eq!(parse_price("$5").unwrap(), 5.0);
/// assert_eq!(parse_price("$1.50").unwrap(), 1.5);
/// assert!(parse_price("$free").is_err());
/// ```
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPrice`] when the remainder is empty, not
/// a number, or not finite.
pub fn parse_price(price: &str) -> Result<f64> {
    let amount = price.strip_prefix('$').unwrap_or(price);
    let value: f64 = amount
        .parse()
        .map_err(|_| CatalogError::invalid_price(price))?;

    // str::parse accepts "inf" and "NaN"; neither is a price.
    if !value.is_finite() {
        return Err(CatalogError::invalid_price(price));
    }

    Ok(value)
}
