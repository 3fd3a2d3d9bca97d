//! Add command implementation.

use cellar_catalog::CellarBeer;
use std::path::Path;
use tracing::info;

/// Runs the add command.
pub fn run(
    data_dir: &Path,
    name: &str,
    genre: &str,
    description: &str,
    image_url: Option<&str>,
    ingredients: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut beer = CellarBeer::new(name, genre, description);
    if let Some(url) = image_url {
        beer = beer.with_image_url(url);
    }
    if let Some(raw) = ingredients {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| format!("--ingredients is not valid JSON: {e}"))?;
        beer = beer.with_ingredients(value);
    }

    let store = super::open_cellar(data_dir)?;
    let id = beer.id;
    store.add_record(beer)?;

    info!(%id, "beer added to cellar");
    println!("✓ Added '{}' to the cellar", name);
    println!("  Id: {}", id);
    println!("  Total: {}", store.count()?);

    Ok(())
}
