use std::fs;

use tracing::debug;

use crate::catalog::{
    error::CatalogError,
    models::{Catalog, GameRecord},
};

/// Reads the static game catalog from a JSON file. The file is an array of
/// `{title, genre, description}` objects, produced offline.
pub fn load_catalog(path: &str) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<GameRecord> = serde_json::from_str(&raw)?;

    debug!("Read {} game records from {}", records.len(), path);

    Catalog::from_records(records)
}
