use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Location of the food catalog file.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_PATH: catalog JSON file (default: "data/catalog.json")
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("CATALOG_PATH").ok())
    }

    pub fn from_value(path: Option<String>) -> Self {
        let path = path
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
        Self {
            path: PathBuf::from(path),
        }
    }
}
