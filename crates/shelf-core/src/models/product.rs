//! Product model definition.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::parse_price;

/// A single catalog record as supplied by the external data source.
///
/// Products are read-only to the core: queries copy them into listings and
/// never modify the catalog they came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name, unique within a catalog
    pub name: String,

    /// Currency-formatted price string, e.g. "$4.50"
    pub price: String,

    /// Category used for grouping and ordering, never for text matching
    pub category: String,

    /// Whether the product is currently in stock
    pub stocked: bool,
}

impl Product {
    /// Numeric value of the price string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::InvalidPrice`] when the price string
    /// is malformed.
    pub fn price_value(&self) -> Result<f64> {
        parse_price(&self.price)
    }
}
