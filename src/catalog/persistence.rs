use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::IngredientCatalog;
use crate::error::{ChefError, Result};
use crate::models::IngredientFact;

/// Load a catalog from a `.json` or `.csv` file.
///
/// JSON is an array of `{name, calories, protein, carbs, fat}` objects;
/// CSV carries the same columns with a header row. Every failure is a
/// `CatalogLoad` error and record order is preserved.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<IngredientCatalog> {
    let path = path.as_ref();
    let source_path = path.display().to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let facts = match extension.as_deref() {
        Some("json") => read_json(path).map_err(|e| ChefError::catalog_load(&source_path, e))?,
        Some("csv") => read_csv(path).map_err(|e| ChefError::catalog_load(&source_path, e))?,
        _ => {
            return Err(ChefError::catalog_load(
                &source_path,
                "unsupported file extension (expected .json or .csv)",
            ));
        }
    };

    let catalog = IngredientCatalog::new(facts).map_err(|e| match e {
        ChefError::CatalogLoad { reason, .. } => ChefError::catalog_load(&source_path, reason),
        other => other,
    })?;

    info!(path = %source_path, count = catalog.len(), "loaded ingredient catalog");
    Ok(catalog)
}

fn read_json(path: &Path) -> Result<Vec<IngredientFact>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_csv(path: &Path) -> Result<Vec<IngredientFact>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut facts = Vec::new();
    for record in rdr.deserialize() {
        facts.push(record?);
    }
    Ok(facts)
}
