//! Command handlers bridging parsed arguments and the core catalog.

use anyhow::{anyhow, Result};
use shelf_core::Catalog;

use crate::args::{ListArgs, ShowArgs};
use crate::renderer::TerminalRenderer;

/// Command handler owning the loaded catalog and the terminal renderer.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a handler for the given catalog and renderer.
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    /// Handle the `list` command: filter, sort, group, and render.
    ///
    /// Output mirrors the reference presentation: a count line, the
    /// grouped listing (or the empty-state explanation with a hint), and
    /// a clear-filters affordance whenever any control is active.
    pub fn handle_list(&self, args: ListArgs) -> Result<()> {
        let state = args.into_state(self.catalog.max_product_price());
        let view = self.catalog.query(&state)?;

        let mut output = format!(
            "Showing {} of {} products\n\n",
            view.product_count(),
            self.catalog.len()
        );
        output.push_str(&view.to_string());

        if view.is_empty() {
            output.push_str("\nTry adjusting your filters.\n");
        }

        if self.catalog.has_active_filters(&state) {
            output.push_str("\nFilters are active. Run `shelf list` with no flags to clear them.\n");
        }

        self.renderer.render(&output)
    }

    /// Handle the `show` command: single-product detail view.
    pub fn handle_show(&self, args: ShowArgs) -> Result<()> {
        let product = self
            .catalog
            .find(&args.name)
            .ok_or_else(|| anyhow!("No product named '{}' in the catalog", args.name))?;

        self.renderer.render(&product.to_string())
    }
}
