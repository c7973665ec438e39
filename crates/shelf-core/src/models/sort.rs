//! Sort key enumeration for catalog ordering.

use std::str::FromStr;

use crate::error::CatalogError;

/// Type-safe enumeration of catalog sort keys.
///
/// Unknown key strings are an explicit [`CatalogError::InvalidSortKey`]
/// error. The reference behavior of treating any unrecognized key as a
/// price-descending sort was a silent fallback; callers that want a
/// fallback must enumerate it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Group by category ascending, names ascending within each category
    #[default]
    Category,

    /// Name ascending
    Name,

    /// Numeric price ascending
    PriceLow,

    /// Numeric price descending
    PriceHigh,
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" => Ok(SortKey::Category),
            "name" => Ok(SortKey::Name),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            _ => Err(CatalogError::InvalidSortKey {
                value: s.to_string(),
            }),
        }
    }
}

impl SortKey {
    /// Convert to the canonical key string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Category => "category",
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }
}
