//! Error types for the catalog library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Price string that does not parse to a finite number
    #[error("Invalid price '{value}': expected a currency string like \"$4.50\"")]
    InvalidPrice { value: String },
    /// Sort key string outside the supported set
    #[error(
        "Invalid sort key '{value}': must be 'category', 'name', 'price-low' or 'price-high'"
    )]
    InvalidSortKey { value: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Creates an invalid price error for the offending string.
    pub fn invalid_price(value: impl Into<String>) -> Self {
        CatalogError::InvalidPrice {
            value: value.into(),
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
