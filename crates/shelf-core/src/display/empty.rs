//! Human-readable explanations for empty query results.

/// Build the "no results" explanation for the current filter controls.
///
/// Active conditions are phrased in a fixed order, skipping the ones that
/// do not apply:
///
/// 1. non-empty filter text: `matching "<text>"`
/// 2. in-stock-only: `in stock`
/// 3. a ceiling below the catalog maximum: `under $<max_price>`
///
/// Zero phrases yield `"No products found"`; one phrase is appended
/// directly; two or more join all but the last with `", "` and the last
/// with `" and "`. No Oxford comma, no trailing period.
///
/// `max_product_price` is the maximum price across the unfiltered catalog
/// and acts as the "no ceiling" sentinel.
///
/// # Examples
///
/// ```rust
/// use shelf_core::empty_listing_message;
///
/// assert_eq!(
///     empty_listing_message("dragon", true, 2.0, 4.5),
///     "No products matching \"dragon\", in stock and under $2"
/// );
/// ```
pub fn empty_listing_message(
    filter_text: &str,
    in_stock_only: bool,
    max_price: f64,
    max_product_price: f64,
) -> String {
    let mut conditions: Vec<String> = Vec::new();

    if !filter_text.is_empty() {
        conditions.push(format!("matching \"{filter_text}\""));
    }
    if in_stock_only {
        conditions.push("in stock".to_string());
    }
    if max_price < max_product_price {
        conditions.push(format!("under ${max_price}"));
    }

    match conditions.as_slice() {
        [] => "No products found".to_string(),
        [only] => format!("No products {only}"),
        [head @ .., last] => format!("No products {} and {last}", head.join(", ")),
    }
}
