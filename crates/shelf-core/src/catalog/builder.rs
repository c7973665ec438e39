//! Builder for loading and configuring Catalog instances.

use std::fs;
use std::path::{Path, PathBuf};

use super::Catalog;
use crate::{
    error::{CatalogError, Result},
    models::Product,
};

/// Builder for loading a [`Catalog`] from its JSON data source.
///
/// The data source is a JSON array of product records:
///
/// ```json
/// [
///   { "name": "apple", "price": "$2", "category": "Fruits", "stocked": true }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    catalog_path: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { catalog_path: None }
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shelf/catalog.json` or
    /// `~/.local/share/shelf/catalog.json`
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog file and builds the validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FileSystem` if the catalog file cannot be read
    /// Returns `CatalogError::Serialization` if the file is not valid JSON
    /// Returns `CatalogError::InvalidPrice` or `CatalogError::InvalidInput`
    /// if record validation fails
    pub fn build(self) -> Result<Catalog> {
        let catalog_path = if let Some(path) = self.catalog_path {
            path
        } else {
            Self::default_catalog_path()?
        };

        let raw = fs::read_to_string(&catalog_path).map_err(|e| CatalogError::FileSystem {
            path: catalog_path.clone(),
            source: e,
        })?;

        let products: Vec<Product> = serde_json::from_str(&raw)?;
        Catalog::new(products)
    }

    /// Returns the default catalog path following XDG Base Directory
    /// specification.
    fn default_catalog_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shelf")
            .place_data_file("catalog.json")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
