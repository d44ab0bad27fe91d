use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::FoodItem;
use business::domain::catalog::source::CatalogSource;

use crate::record::CatalogFile;

/// Reads the food catalog from a JSON file of the form `{"items": [...]}`.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<Vec<FoodItem>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!("Cannot read catalog {}: {}", self.path.display(), e);
            CatalogError::SourceUnavailable
        })?;
        parse_catalog(&content)
    }
}

pub fn parse_catalog(content: &str) -> Result<Vec<FoodItem>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(content).map_err(|e| {
        tracing::error!("Invalid catalog JSON: {}", e);
        CatalogError::InvalidFormat
    })?;
    file.items
        .into_iter()
        .map(|record| record.into_domain())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    const CATALOG: &str = r#"{
        "items": [
            {
                "id": "oats",
                "name": "Rolled oats",
                "kcal_per_100g": 389,
                "protein_per_100g": 17,
                "carbs_per_100g": 66,
                "fat_per_100g": 7,
                "category": "grains",
                "tags": ["gluten", "vegan"],
                "slots": ["breakfast"],
                "portion": { "min_grams": 30, "max_grams": 120, "step_grams": 10 }
            },
            {
                "id": "apple",
                "name": "Apples",
                "kcal_per_100g": 52,
                "protein_per_100g": 0.3,
                "carbs_per_100g": 14,
                "fat_per_100g": 0.2,
                "category": "produce",
                "slots": ["snack"],
                "portion": { "min_grams": 100, "max_grams": 300, "step_grams": 10 }
            }
        ]
    }"#;

    fn temp_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn should_parse_items_in_file_order() {
        let items = parse_catalog(CATALOG).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_str(), "oats");
        assert!(items[1].tags.is_empty());
    }

    #[test]
    fn should_reject_malformed_json() {
        let result = parse_catalog("{ \"items\": [ { \"id\": 1 } ] }");

        assert_eq!(result.unwrap_err(), CatalogError::InvalidFormat);
    }

    #[test]
    fn should_reject_invalid_item() {
        let content = CATALOG.replace("\"min_grams\": 30", "\"min_grams\": 300");

        let result = parse_catalog(&content);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidItem("oats".to_string())
        );
    }

    #[tokio::test]
    async fn should_load_catalog_from_file() {
        let path = temp_file(CATALOG);
        let source = JsonCatalogSource::new(&path);

        let items = source.load().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(items.len(), 2);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_log_cause_of_malformed_json() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result =
            tracing::subscriber::with_default(subscriber, || parse_catalog("{ \"items\": 3 }"));

        assert_eq!(result.unwrap_err(), CatalogError::InvalidFormat);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Invalid catalog JSON"), "logged: {output}");
        assert!(output.contains("invalid type"), "logged: {output}");
    }

    #[tokio::test]
    async fn should_report_missing_file_as_unavailable() {
        let source = JsonCatalogSource::new("/nonexistent/catalog.json");

        let result = source.load().await;

        assert_eq!(result.unwrap_err(), CatalogError::SourceUnavailable);
    }
}
