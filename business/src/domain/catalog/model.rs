use std::collections::BTreeSet;

use serde::Serialize;

use super::errors::CatalogError;
use super::value_objects::{FoodCategory, FoodId, PortionRule};
use crate::domain::meal::value_objects::SlotType;
use crate::domain::nutrition::model::NutrientTotals;

/// Immutable catalog entry. Nutrients are expressed per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
    pub category: FoodCategory,
    pub tags: BTreeSet<String>,
    pub slots: BTreeSet<SlotType>,
    pub portion: PortionRule,
}

pub struct NewFoodItemProps {
    pub id: String,
    pub name: String,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
    pub category: FoodCategory,
    pub tags: Vec<String>,
    pub slots: Vec<SlotType>,
    pub portion: PortionRule,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps) -> Result<Self, CatalogError> {
        let id = props.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogError::InvalidItem("<empty id>".to_string()));
        }
        if props.name.trim().is_empty() {
            return Err(CatalogError::InvalidItem(id));
        }

        let nutrients = [
            props.kcal_per_100g,
            props.protein_per_100g,
            props.carbs_per_100g,
            props.fat_per_100g,
        ];
        if nutrients.iter().any(|n| !n.is_finite() || *n < 0.0) {
            return Err(CatalogError::InvalidItem(id));
        }
        if !props.portion.is_valid() || props.slots.is_empty() {
            return Err(CatalogError::InvalidItem(id));
        }

        Ok(Self {
            id: FoodId::new(id),
            name: props.name.trim().to_string(),
            kcal_per_100g: props.kcal_per_100g,
            protein_per_100g: props.protein_per_100g,
            carbs_per_100g: props.carbs_per_100g,
            fat_per_100g: props.fat_per_100g,
            category: props.category,
            tags: props
                .tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            slots: props.slots.into_iter().collect(),
            portion: props.portion,
        })
    }

    /// Nutrients delivered by `grams` of this item.
    pub fn nutrients_for(&self, grams: f64) -> NutrientTotals {
        let factor = grams / 100.0;
        NutrientTotals {
            kcal: self.kcal_per_100g * factor,
            protein_g: self.protein_per_100g * factor,
            carbs_g: self.carbs_per_100g * factor,
            fat_g: self.fat_per_100g * factor,
        }
    }

    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }

    pub fn suits(&self, slot: SlotType) -> bool {
        self.slots.contains(&slot)
    }
}

/// Query over the catalog. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub excluded_tags: BTreeSet<String>,
    pub category: Option<FoodCategory>,
    pub slot: Option<SlotType>,
}

impl CatalogFilter {
    pub fn matches(&self, item: &FoodItem) -> bool {
        if item.has_any_tag(&self.excluded_tags) {
            return false;
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        match self.slot {
            Some(slot) => item.suits(slot),
            None => true,
        }
    }
}
