//! Browse command implementation.

use cellar_catalog::{CatalogBeer, PageSource, RemoteCatalog};
use serde::Serialize;

/// One page of the public catalog, as printed by `cellar browse`.
#[derive(Debug, Serialize)]
pub struct BrowseResult {
    /// Requested page number.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// The entries on this page.
    pub records: Vec<CatalogBeer>,
}

/// Runs the browse command.
pub fn run(
    api_url: &str,
    page: usize,
    page_size: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = RemoteCatalog::with_base_url(api_url);
    let batch = catalog.fetch_page(page, page_size)?;

    let output = BrowseResult {
        page,
        page_size,
        records: batch.records,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        _ => print_text(&output),
    }

    Ok(())
}

fn print_text(output: &BrowseResult) {
    if output.records.is_empty() {
        println!("No catalog entries on page {}", output.page);
        return;
    }

    println!("Catalog - page {}", output.page);
    for beer in &output.records {
        println!("  #{} {}", beer.id, beer.name);
        println!("      {}", beer.tagline);
    }

    if output.records.len() == output.page_size {
        println!("  ... more on page {}", output.page + 1);
    }
}
