//! Deterministic ordering of product lists.

use crate::error::Result;
use crate::models::{parse_price, Product, SortKey};

/// Order a product list by the selected sort key.
///
/// Operates on a copy; the input slice is never mutated. Every branch
/// supplies a full tie-break, so the output is deterministic regardless of
/// the input order:
///
/// - [`SortKey::Category`]: category ascending, then name ascending
/// - [`SortKey::Name`]: name ascending
/// - [`SortKey::PriceLow`] / [`SortKey::PriceHigh`]: numeric price
///   ascending/descending, then name ascending
///
/// String comparisons are lexicographic by Unicode code point.
///
/// # Errors
///
/// Price sorts parse every price up front and return
/// [`crate::CatalogError::InvalidPrice`] for malformed price strings.
pub fn sort_products(products: &[Product], sort_by: SortKey) -> Result<Vec<Product>> {
    let mut sorted = products.to_vec();

    match sort_by {
        SortKey::Category => {
            sorted.sort_by(|a, b| {
                a.category
                    .cmp(&b.category)
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
        SortKey::Name => {
            sorted.sort_by(|a, b| a.name.cmp(&b.name));
        }
        SortKey::PriceLow | SortKey::PriceHigh => {
            let mut keyed: Vec<(f64, Product)> = sorted
                .into_iter()
                .map(|product| Ok((parse_price(&product.price)?, product)))
                .collect::<Result<_>>()?;

            keyed.sort_by(|(price_a, a), (price_b, b)| {
                let by_price = if sort_by == SortKey::PriceHigh {
                    price_b.total_cmp(price_a)
                } else {
                    price_a.total_cmp(price_b)
                };
                by_price.then_with(|| a.name.cmp(&b.name))
            });

            sorted = keyed.into_iter().map(|(_, product)| product).collect();
        }
    }

    Ok(sorted)
}
