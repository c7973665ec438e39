//! Shelf CLI Application
//!
//! Command-line interface for the shelf catalog browsing tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelf_core::CatalogBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { catalog_file, no_color, command } = Args::parse();

    let catalog = CatalogBuilder::new()
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to load catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shelf started with {} products", catalog.len());

    let cli = Cli::new(catalog, renderer);

    match command {
        Some(Commands::List(list_args)) => cli.handle_list(list_args),
        Some(Commands::Show(show_args)) => cli.handle_show(show_args),
        None => cli.handle_list(args::ListArgs::default()),
    }
}
