#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate game title in catalog: {0}")]
    DuplicateTitle(String),

    #[error("Catalog contains no games")]
    Empty,
}
