//! Listing types for grouped catalog output.
//!
//! This module provides the display plan produced by a catalog query: an
//! ordered sequence of category headers and product rows, with a markdown
//! Display implementation for terminal rendering.

use std::{fmt, ops::Index};

use crate::models::Product;

/// A single entry in a rendered catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEntry {
    /// Header opening a maximal contiguous run of same-category products
    CategoryHeader(String),

    /// One product row
    Product(Product),
}

/// Ordered, grouped result of filtering and sorting, ready for rendering.
///
/// A listing is built from a product list already in display order. A
/// [`ListingEntry::CategoryHeader`] is inserted exactly once before each
/// maximal contiguous run of same-category products, and never for a
/// category with no surviving product. Product entries preserve the input
/// order exactly.
///
/// # Examples
///
/// ```rust
/// use shelf_core::{Listing, ListingEntry, Product};
///
/// let listing = Listing::from_sorted(vec![Product {
///     name: "apple".to_string(),
///     price: "$2".to_string(),
///     category: "Fruits".to_string(),
///     stocked: true,
/// }]);
///
/// assert_eq!(listing.product_count(), 1);
/// assert_eq!(
///     listing[0],
///     ListingEntry::CategoryHeader("Fruits".to_string())
/// );
/// ```
pub struct Listing(pub Vec<ListingEntry>);

impl Listing {
    /// Build a listing from products already in display order.
    ///
    /// The scan inserts a header whenever the current product's category
    /// differs from the previous product's, or at the first product.
    pub fn from_sorted(products: Vec<Product>) -> Self {
        let mut entries = Vec::with_capacity(products.len());
        let mut current_category: Option<String> = None;

        for product in products {
            if current_category.as_deref() != Some(product.category.as_str()) {
                current_category = Some(product.category.clone());
                entries.push(ListingEntry::CategoryHeader(product.category.clone()));
            }
            entries.push(ListingEntry::Product(product));
        }

        Self(entries)
    }

    /// Check if the listing has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of entries, headers included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of product rows, headers excluded.
    pub fn product_count(&self) -> usize {
        self.0
            .iter()
            .filter(|entry| matches!(entry, ListingEntry::Product(_)))
            .count()
    }

    /// Get a reference to the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&ListingEntry> {
        self.0.get(index)
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ListingEntry> {
        self.0.iter()
    }
}

impl Index<usize> for Listing {
    type Output = ListingEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Listing {
    type Item = ListingEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a ListingEntry;
    type IntoIter = std::slice::Iter<'a, ListingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            match entry {
                ListingEntry::CategoryHeader(category) => {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "## {category}")?;
                    writeln!(f)?;
                }
                ListingEntry::Product(product) => {
                    if product.stocked {
                        writeln!(f, "- {}: {}", product.name, product.price)?;
                    } else {
                        writeln!(f, "- {}: {} (Out of stock)", product.name, product.price)?;
                    }
                }
            }
        }
        Ok(())
    }
}
