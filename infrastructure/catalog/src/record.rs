use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{FoodItem, NewFoodItemProps};
use business::domain::catalog::value_objects::{FoodCategory, PortionRule};
use business::domain::meal::value_objects::SlotType;

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<FoodItemRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PortionRecord {
    pub min_grams: f64,
    pub max_grams: f64,
    pub step_grams: f64,
}

#[derive(Debug, Deserialize)]
pub struct FoodItemRecord {
    pub id: String,
    pub name: String,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub slots: Vec<String>,
    pub portion: PortionRecord,
}

impl FoodItemRecord {
    pub fn into_domain(self) -> Result<FoodItem, CatalogError> {
        let category = self
            .category
            .trim()
            .to_lowercase()
            .parse::<FoodCategory>()
            .map_err(|_| CatalogError::InvalidItem(self.id.clone()))?;
        let slots = self
            .slots
            .iter()
            .map(|s| s.trim().to_lowercase().parse::<SlotType>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CatalogError::InvalidItem(self.id.clone()))?;

        FoodItem::new(NewFoodItemProps {
            id: self.id,
            name: self.name,
            kcal_per_100g: self.kcal_per_100g,
            protein_per_100g: self.protein_per_100g,
            carbs_per_100g: self.carbs_per_100g,
            fat_per_100g: self.fat_per_100g,
            category,
            tags: self.tags,
            slots,
            portion: PortionRule {
                min_grams: self.portion.min_grams,
                max_grams: self.portion.max_grams,
                step_grams: self.portion.step_grams,
            },
        })
    }
}
