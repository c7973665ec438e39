//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core
//! domain models, separated from the model definitions to keep data
//! structures and presentation logic apart. Output is markdown suitable
//! for the terminal renderer.

use std::fmt;

use crate::models::{Product, SortKey};

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Product {
    /// Standalone detail view of a single product.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Price: {}", self.price)?;
        writeln!(
            f,
            "- Stock: {}",
            if self.stocked {
                "in stock"
            } else {
                "out of stock"
            }
        )?;
        Ok(())
    }
}
