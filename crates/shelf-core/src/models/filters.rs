//! Filter state for catalog queries.

use super::SortKey;

/// The complete set of user-controlled parameters governing which products
/// are shown and in what order.
///
/// The state is owned by the caller (a CLI, a UI component, a test); the
/// core only reads it. Mutation goes through the explicit setters so every
/// state transition has one obvious entry point, and [`FilterState::clear`]
/// restores the neutral state that matches the whole catalog.
///
/// `max_price` defaults to the catalog-wide maximum price, which doubles as
/// the "no ceiling" sentinel: a ceiling at or above it excludes nothing and
/// counts as inactive for [`crate::Catalog::has_active_filters`].
///
/// # Examples
///
/// ```rust
/// use shelf_core::FilterState;
///
/// let mut state = FilterState::new(4.5);
/// state.set_filter_text("apple");
/// state.set_in_stock_only(true);
/// assert_eq!(state.filter_text(), "apple");
///
/// state.clear(4.5);
/// assert_eq!(state, FilterState::new(4.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    filter_text: String,
    in_stock_only: bool,
    sort_by: SortKey,
    max_price: f64,
}

impl FilterState {
    /// Neutral state: empty text, stock filter off, category grouping, and
    /// the price ceiling at the catalog-wide maximum.
    pub fn new(max_product_price: f64) -> Self {
        Self {
            filter_text: String::new(),
            in_stock_only: false,
            sort_by: SortKey::default(),
            max_price: max_product_price,
        }
    }

    /// Current text filter, matched case-insensitively against names.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Whether out-of-stock products are hidden.
    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    /// Selected sort key.
    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Current price ceiling.
    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// Replace the text filter.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Toggle the in-stock-only filter.
    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
    }

    /// Select a sort key.
    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    /// Replace the price ceiling.
    pub fn set_max_price(&mut self, max_price: f64) {
        self.max_price = max_price;
    }

    /// Reset every control back to the neutral state.
    pub fn clear(&mut self, max_product_price: f64) {
        *self = Self::new(max_product_price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_neutral() {
        let state = FilterState::new(4.5);
        assert_eq!(state.filter_text(), "");
        assert!(!state.in_stock_only());
        assert_eq!(state.sort_by(), SortKey::Category);
        assert_eq!(state.max_price(), 4.5);
    }

    #[test]
    fn test_setters_replace_each_control() {
        let mut state = FilterState::new(4.5);
        state.set_filter_text("basil");
        state.set_in_stock_only(true);
        state.set_sort_by(SortKey::PriceHigh);
        state.set_max_price(2.0);

        assert_eq!(state.filter_text(), "basil");
        assert!(state.in_stock_only());
        assert_eq!(state.sort_by(), SortKey::PriceHigh);
        assert_eq!(state.max_price(), 2.0);
    }

    #[test]
    fn test_clear_restores_neutral_state() {
        let mut state = FilterState::new(4.5);
        state.set_filter_text("dragon");
        state.set_in_stock_only(true);
        state.set_sort_by(SortKey::Name);
        state.set_max_price(1.0);

        state.clear(4.5);
        assert_eq!(state, FilterState::new(4.5));
    }
}
