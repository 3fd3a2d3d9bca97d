//! List command implementation.

use cellar_catalog::CellarBeer;
use serde::Serialize;
use std::path::Path;

/// One page of the personal cellar, as printed by `cellar list`.
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Requested page number.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Full cellar size.
    pub total_count: usize,
    /// The records on this page.
    pub records: Vec<CellarBeer>,
}

/// Runs the list command.
pub fn run(
    data_dir: &Path,
    page: usize,
    page_size: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_cellar(data_dir)?;
    let result = store.paginated(page, page_size)?;

    let output = ListResult {
        page,
        page_size,
        total_count: result.total_count,
        records: result.records,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        _ => print_text(&output),
    }

    Ok(())
}

fn print_text(output: &ListResult) {
    if output.total_count == 0 {
        println!("The cellar is empty - add your first beer with 'cellar add'");
        return;
    }

    println!(
        "Cellar - page {} ({} of {} beers)",
        output.page,
        output.records.len(),
        output.total_count
    );
    for beer in &output.records {
        println!("  [{}] {}", beer.genre, beer.name);
        println!("      {}", beer.description);
    }

    if output.page * output.page_size < output.total_count {
        println!("  ... more on page {}", output.page + 1);
    }
}
