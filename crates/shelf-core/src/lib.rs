//! Core library for the Shelf catalog browsing tool.
//!
//! This crate provides the filtering, sorting, and grouping logic for a
//! read-only product catalog: the caller owns a [`FilterState`], the
//! catalog turns it into an ordered, category-grouped display plan, and an
//! empty result comes back with a human-readable explanation of the
//! filters that produced it.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting
//! output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   standalone detail views
//! - **Listing Wrappers** ([`display`]): Format grouped query results and
//!   empty-state messages
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! Everything the core emits is markdown; presentation layers decide how
//! (or whether) to style it.
//!
//! # Quick Start
//!
//! ```rust
//! use shelf_core::{Catalog, Product};
//!
//! # fn example() -> shelf_core::Result<()> {
//! let catalog = Catalog::new(vec![
//!     Product {
//!         name: "apple".to_string(),
//!         price: "$2".to_string(),
//!         category: "Fruits".to_string(),
//!         stocked: true,
//!     },
//!     Product {
//!         name: "basil".to_string(),
//!         price: "$4.50".to_string(),
//!         category: "Herbs".to_string(),
//!         stocked: false,
//!     },
//! ])?;
//!
//! // The caller owns the filter state and mutates it through setters.
//! let mut state = catalog.default_state();
//! state.set_in_stock_only(true);
//!
//! // Every query recomputes the view from scratch.
//! let view = catalog.query(&state)?;
//! assert_eq!(view.product_count(), 1);
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder, CatalogView};
pub use display::{empty_listing_message, Listing, ListingEntry};
pub use error::{CatalogError, Result};
pub use models::{parse_price, FilterState, Product, SortKey};
