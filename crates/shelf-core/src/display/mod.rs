//! Display wrappers and formatting for catalog output.
//!
//! The crate follows a Display-based formatting architecture:
//!
//! - **Domain models** ([`crate::models`]) implement [`std::fmt::Display`]
//!   via [`models`] for standalone detail views
//! - **Listing types** ([`listing`]) format the grouped result of a query
//! - **Empty-state messages** ([`empty`]) explain why a query matched
//!   nothing
//!
//! Everything formats as markdown; the terminal renderer in the CLI crate
//! decides whether that markdown is styled or printed plain.

pub mod empty;
pub mod listing;
pub mod models;

pub use empty::empty_listing_message;
pub use listing::{Listing, ListingEntry};
