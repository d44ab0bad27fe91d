use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::FoodItem;

/// Port for the reference data behind the catalog.
///
/// Called once at startup; the resulting items are validated and frozen in a
/// [`FoodCatalog`](super::food_catalog::FoodCatalog).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<FoodItem>, CatalogError>;
}
