//! High-level catalog API for filtering, sorting, and grouping products.
//!
//! This module provides the main [`Catalog`] interface. The catalog owns
//! the immutable product list for a session and turns a caller-owned
//! [`FilterState`] into a [`CatalogView`]: either a grouped listing or an
//! explanation of why nothing matched.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   filter     │───▶│    sort      │───▶│   Listing    │
//! │ (predicate)  │    │ (tie-broken) │    │ (grouped)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Every query recomputes the view from scratch; there is no caching and
//! no shared mutable state, so queries are pure functions of the catalog
//! and the filter state.
//!
//! # Usage
//!
//! ```rust
//! use shelf_core::{Catalog, Product, SortKey};
//!
//! # fn example() -> shelf_core::Result<()> {
//! let catalog = Catalog::new(vec![
//!     Product {
//!         name: "apple".to_string(),
//!         price: "$2".to_string(),
//!         category: "Fruits".to_string(),
//!         stocked: true,
//!     },
//! ])?;
//!
//! let mut state = catalog.default_state();
//! state.set_sort_by(SortKey::PriceLow);
//! let view = catalog.query(&state)?;
//! assert_eq!(view.product_count(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;

// Module declarations
pub mod builder;
pub mod filter;
pub mod sort;

#[cfg(test)]
mod tests;

// Re-export the main entry points
pub use builder::CatalogBuilder;
pub use filter::matches;
pub use sort::sort_products;

use crate::display::{empty_listing_message, Listing};
use crate::error::{CatalogError, Result};
use crate::models::{parse_price, FilterState, Product, SortKey};

/// The full, unfiltered product list for a session.
///
/// Construction validates every record up front, so a malformed catalog
/// fails at load time rather than in the middle of a query, and derives
/// the catalog-wide maximum price used as the "no ceiling" sentinel.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    max_product_price: f64,
}

impl Catalog {
    /// Validate a product list and build a catalog from it.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::InvalidPrice`] - a record carries a malformed
    ///   price string
    /// * [`CatalogError::InvalidInput`] - two records share a name
    ///   (compared case-insensitively, so name lookup stays unambiguous)
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut max_product_price: f64 = 0.0;
        let mut seen_names = HashSet::with_capacity(products.len());

        for product in &products {
            let price = parse_price(&product.price)?;
            if price > max_product_price {
                max_product_price = price;
            }

            if !seen_names.insert(product.name.to_lowercase()) {
                return Err(CatalogError::invalid_input(
                    "name",
                    format!("duplicate product name '{}'", product.name),
                ));
            }
        }

        Ok(Self {
            products,
            max_product_price,
        })
    }

    /// The unfiltered product records.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the unfiltered catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Maximum price across the unfiltered catalog; 0 when empty.
    pub fn max_product_price(&self) -> f64 {
        self.max_product_price
    }

    /// The neutral filter state for this catalog.
    ///
    /// Equivalent to what [`FilterState::clear`] resets to: every product
    /// matches and the listing groups by category.
    pub fn default_state(&self) -> FilterState {
        FilterState::new(self.max_product_price)
    }

    /// Look up a product by name, case-insensitively.
    ///
    /// Names are unique within a catalog, so at most one record matches.
    pub fn find(&self, name: &str) -> Option<&Product> {
        let lowered = name.to_lowercase();
        self.products
            .iter()
            .find(|product| product.name.to_lowercase() == lowered)
    }

    /// Whether any filter control deviates from the neutral state.
    ///
    /// True when the filter text is non-empty, the stock filter is on,
    /// the sort key is not the category default, or the price ceiling is
    /// below the catalog maximum. Callers use this to decide whether to
    /// surface a clear-filters affordance.
    pub fn has_active_filters(&self, state: &FilterState) -> bool {
        !state.filter_text().is_empty()
            || state.in_stock_only()
            || state.sort_by() != SortKey::Category
            || state.max_price() < self.max_product_price
    }

    /// Apply the filter state and produce a display plan.
    ///
    /// Filters via [`filter::matches`], orders via [`sort::sort_products`],
    /// then groups the ordered survivors into a [`Listing`]. When nothing
    /// survives, the view carries the [`empty_listing_message`] built from
    /// the state's controls and the catalog-wide maximum price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPrice`] for malformed price strings;
    /// a catalog built through [`Catalog::new`] has already rejected them.
    pub fn query(&self, state: &FilterState) -> Result<CatalogView> {
        let mut survivors = Vec::new();
        for product in &self.products {
            if matches(product, state)? {
                survivors.push(product.clone());
            }
        }

        if survivors.is_empty() {
            return Ok(CatalogView::Empty {
                message: empty_listing_message(
                    state.filter_text(),
                    state.in_stock_only(),
                    state.max_price(),
                    self.max_product_price,
                ),
            });
        }

        let sorted = sort_products(&survivors, state.sort_by())?;
        Ok(CatalogView::Listing(Listing::from_sorted(sorted)))
    }
}

/// Result of applying the filter controls to a catalog.
///
/// Either an ordered, grouped listing with at least one product, or an
/// empty result carrying the human-readable explanation of the active
/// filters.
pub enum CatalogView {
    /// At least one product survived filtering
    Listing(Listing),

    /// Nothing survived; the message explains which filters were active
    Empty { message: String },
}

impl CatalogView {
    /// Check if the view holds no products.
    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogView::Empty { .. })
    }

    /// Number of product rows in the view.
    pub fn product_count(&self) -> usize {
        match self {
            CatalogView::Listing(listing) => listing.product_count(),
            CatalogView::Empty { .. } => 0,
        }
    }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogView::Listing(listing) => write!(f, "{listing}"),
            CatalogView::Empty { message } => writeln!(f, "{message}"),
        }
    }
}
