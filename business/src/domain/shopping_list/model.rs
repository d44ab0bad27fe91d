use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::catalog::value_objects::FoodCategory;
use crate::domain::meal::value_objects::SlotRef;

/// One line of the shopping list: an ingredient summed over the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub ingredient_name: String,
    pub total_quantity_grams: f64,
    pub category: FoodCategory,
    pub source_meal_slots: BTreeSet<SlotRef>,
}

/// Derived from a finalized plan; regenerate it whenever the plan changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingList {
    pub plan_id: Uuid,
    /// Fingerprint of the plan the entries were computed from.
    pub plan_fingerprint: String,
    pub entries: Vec<ShoppingListEntry>,
}

impl ShoppingList {
    pub fn total_grams(&self) -> f64 {
        self.entries.iter().map(|e| e.total_quantity_grams).sum()
    }

    pub fn entries_in(&self, category: FoodCategory) -> impl Iterator<Item = &ShoppingListEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}
