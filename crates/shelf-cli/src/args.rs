//! Command-line argument definitions using clap.
//!
//! This module implements the parameter wrapper pattern: clap-specific
//! argument structs live here and convert explicitly into the core's
//! [`FilterState`], so the core stays free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use shelf_core::{FilterState, SortKey};

/// Main command-line interface for the Shelf catalog browsing tool
///
/// Shelf loads a read-only product catalog and displays it filtered,
/// sorted, and grouped by category. All filter controls are one-shot
/// flags; running without flags shows the whole catalog and clears any
/// previous filtering.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the catalog JSON file. Defaults to
    /// $XDG_DATA_HOME/shelf/catalog.json
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shelf CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List products, filtered and grouped
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show details of a single product
    #[command(alias = "s")]
    Show(ShowArgs),
}

/// List products, filtered and grouped
///
/// Each flag maps to one filter control. Omitted flags stay neutral, so
/// a bare `shelf list` shows every product grouped by category.
#[derive(ClapArgs, Default)]
pub struct ListArgs {
    /// Only show products whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub matching: Option<String>,

    /// Only show products that are in stock
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order for the listing
    #[arg(long, value_enum, default_value_t = SortKeyArg::Category)]
    pub sort: SortKeyArg,

    /// Only show products priced at or under this amount
    #[arg(long, value_name = "PRICE")]
    pub max_price: Option<f64>,
}

impl ListArgs {
    /// Convert CLI arguments into the core filter state.
    ///
    /// `max_product_price` supplies the "no ceiling" default when
    /// `--max-price` is omitted.
    pub fn into_state(self, max_product_price: f64) -> FilterState {
        let mut state = FilterState::new(max_product_price);
        if let Some(text) = self.matching {
            state.set_filter_text(text);
        }
        state.set_in_stock_only(self.in_stock);
        state.set_sort_by(self.sort.into());
        if let Some(ceiling) = self.max_price {
            state.set_max_price(ceiling);
        }
        state
    }
}

/// Show details of a single product
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Name of the product to display (case-insensitive)
    pub name: String,
}

/// Command-line argument representation of sort keys
///
/// Mirrors [`SortKey`] so clap can validate and document the accepted
/// values; unknown keys are rejected at parse time.
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKeyArg {
    /// Group by category, names ascending within each category
    #[default]
    Category,
    /// Name ascending
    Name,
    /// Price ascending
    PriceLow,
    /// Price descending
    PriceHigh,
}

impl std::fmt::Display for SortKeyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKeyArg::Category => write!(f, "category"),
            SortKeyArg::Name => write!(f, "name"),
            SortKeyArg::PriceLow => write!(f, "price-low"),
            SortKeyArg::PriceHigh => write!(f, "price-high"),
        }
    }
}

impl From<SortKeyArg> for SortKey {
    fn from(val: SortKeyArg) -> Self {
        match val {
            SortKeyArg::Category => SortKey::Category,
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::PriceLow => SortKey::PriceLow,
            SortKeyArg::PriceHigh => SortKey::PriceHigh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_default_to_neutral_state() {
        let state = ListArgs::default().into_state(4.5);
        assert_eq!(state, FilterState::new(4.5));
    }

    #[test]
    fn test_list_args_map_onto_each_control() {
        let args = ListArgs {
            matching: Some("apple".to_string()),
            in_stock: true,
            sort: SortKeyArg::PriceLow,
            max_price: Some(2.0),
        };

        let state = args.into_state(4.5);
        assert_eq!(state.filter_text(), "apple");
        assert!(state.in_stock_only());
        assert_eq!(state.sort_by(), SortKey::PriceLow);
        assert_eq!(state.max_price(), 2.0);
    }

    #[test]
    fn test_omitted_ceiling_defaults_to_catalog_maximum() {
        let args = ListArgs {
            matching: None,
            in_stock: false,
            sort: SortKeyArg::Category,
            max_price: None,
        };
        assert_eq!(args.into_state(4.5).max_price(), 4.5);
    }
}
