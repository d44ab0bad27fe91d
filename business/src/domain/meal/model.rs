use std::sync::Arc;

use serde::Serialize;

use super::value_objects::{SlotRef, SlotType};
use crate::domain::catalog::model::FoodItem;
use crate::domain::nutrition::model::NutrientTotals;

/// One food item and its portion inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealItem {
    pub food: Arc<FoodItem>,
    pub grams: f64,
}

impl MealItem {
    pub fn nutrients(&self) -> NutrientTotals {
        self.food.nutrients_for(self.grams)
    }
}

/// A meal occasion of one day, owned by the enclosing plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSlot {
    pub day_index: u8,
    pub slot_type: SlotType,
    pub items: Vec<MealItem>,
}

impl MealSlot {
    pub fn slot_ref(&self) -> SlotRef {
        SlotRef {
            day_index: self.day_index,
            slot_type: self.slot_type,
        }
    }

    pub fn totals(&self) -> NutrientTotals {
        self.items.iter().map(MealItem::nutrients).sum()
    }

    /// Item contributing the largest kcal share. Ties go to the lowest id.
    pub fn dominant(&self) -> Option<&Arc<FoodItem>> {
        dominant_of(&self.items)
    }
}

pub(crate) fn dominant_of(items: &[MealItem]) -> Option<&Arc<FoodItem>> {
    items
        .iter()
        .max_by(|a, b| {
            a.nutrients()
                .kcal
                .total_cmp(&b.nutrients().kcal)
                .then_with(|| b.food.id.cmp(&a.food.id))
        })
        .map(|item| &item.food)
}
