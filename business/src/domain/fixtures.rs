//! Reference catalog shared by unit tests.

use std::sync::Arc;

use crate::domain::catalog::food_catalog::FoodCatalog;
use crate::domain::catalog::model::{FoodItem, NewFoodItemProps};
use crate::domain::catalog::value_objects::{FoodCategory, PortionRule};
use crate::domain::meal::value_objects::SlotType;

use FoodCategory::*;
use SlotType::*;

struct Row {
    id: &'static str,
    name: &'static str,
    per_100g: [f64; 4],
    category: FoodCategory,
    tags: &'static [&'static str],
    slots: &'static [SlotType],
    portion: [f64; 3],
}

const ROWS: &[Row] = &[
    Row { id: "almonds", name: "Almonds", per_100g: [579.0, 21.0, 22.0, 50.0], category: NutsSeeds, tags: &["nuts", "vegan"], slots: &[Snack], portion: [15.0, 50.0, 5.0] },
    Row { id: "apple", name: "Apples", per_100g: [52.0, 0.3, 14.0, 0.2], category: Produce, tags: &["vegan"], slots: &[Snack], portion: [100.0, 300.0, 10.0] },
    Row { id: "avocado", name: "Avocado", per_100g: [160.0, 2.0, 9.0, 15.0], category: Produce, tags: &["vegan"], slots: &[Breakfast, Lunch, Dinner], portion: [50.0, 200.0, 25.0] },
    Row { id: "banana", name: "Bananas", per_100g: [89.0, 1.1, 23.0, 0.3], category: Produce, tags: &["vegan"], slots: &[Breakfast, Snack], portion: [100.0, 240.0, 20.0] },
    Row { id: "beef-mince", name: "Lean beef mince", per_100g: [250.0, 26.0, 0.0, 15.0], category: Meat, tags: &["meat"], slots: &[Lunch, Dinner], portion: [100.0, 250.0, 10.0] },
    Row { id: "blueberries", name: "Blueberries", per_100g: [57.0, 0.7, 14.0, 0.3], category: Produce, tags: &["vegan"], slots: &[Breakfast, Snack], portion: [50.0, 200.0, 25.0] },
    Row { id: "broccoli", name: "Broccoli", per_100g: [34.0, 2.8, 7.0, 0.4], category: Produce, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [50.0, 300.0, 10.0] },
    Row { id: "carrots", name: "Carrots", per_100g: [41.0, 0.9, 10.0, 0.2], category: Produce, tags: &["vegan"], slots: &[Snack, Lunch], portion: [50.0, 300.0, 10.0] },
    Row { id: "chicken-breast", name: "Chicken breast", per_100g: [165.0, 31.0, 0.0, 3.6], category: Meat, tags: &["meat"], slots: &[Lunch, Dinner], portion: [100.0, 250.0, 10.0] },
    Row { id: "chickpeas", name: "Chickpeas", per_100g: [164.0, 8.9, 27.0, 2.6], category: Legumes, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [100.0, 300.0, 10.0] },
    Row { id: "cod", name: "Cod fillet", per_100g: [82.0, 18.0, 0.0, 0.7], category: Seafood, tags: &["fish"], slots: &[Lunch, Dinner], portion: [100.0, 300.0, 10.0] },
    Row { id: "cottage-cheese", name: "Cottage cheese", per_100g: [98.0, 11.0, 3.4, 4.3], category: Dairy, tags: &["dairy"], slots: &[Breakfast, Snack], portion: [100.0, 300.0, 25.0] },
    Row { id: "eggs", name: "Eggs", per_100g: [143.0, 13.0, 1.0, 10.0], category: Eggs, tags: &["egg"], slots: &[Breakfast], portion: [50.0, 250.0, 50.0] },
    Row { id: "greek-yogurt", name: "Greek yogurt", per_100g: [97.0, 9.0, 4.0, 5.0], category: Dairy, tags: &["dairy"], slots: &[Breakfast, Snack], portion: [100.0, 400.0, 25.0] },
    Row { id: "hummus", name: "Hummus", per_100g: [166.0, 8.0, 14.0, 10.0], category: Legumes, tags: &["vegan"], slots: &[Snack], portion: [30.0, 150.0, 10.0] },
    Row { id: "lentils", name: "Lentils", per_100g: [116.0, 9.0, 20.0, 0.4], category: Legumes, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [100.0, 300.0, 10.0] },
    Row { id: "milk", name: "Milk", per_100g: [42.0, 3.4, 5.0, 1.0], category: Dairy, tags: &["dairy"], slots: &[Breakfast], portion: [100.0, 400.0, 50.0] },
    Row { id: "oats", name: "Rolled oats", per_100g: [389.0, 17.0, 66.0, 7.0], category: Grains, tags: &["gluten", "vegan"], slots: &[Breakfast], portion: [30.0, 120.0, 10.0] },
    Row { id: "olive-oil", name: "Olive oil", per_100g: [884.0, 0.0, 0.0, 100.0], category: OilsFats, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [5.0, 30.0, 5.0] },
    Row { id: "pasta", name: "Pasta", per_100g: [158.0, 5.8, 31.0, 0.9], category: Grains, tags: &["gluten", "vegan"], slots: &[Lunch, Dinner], portion: [100.0, 400.0, 10.0] },
    Row { id: "peanut-butter", name: "Peanut butter", per_100g: [588.0, 25.0, 20.0, 50.0], category: NutsSeeds, tags: &["nuts", "vegan"], slots: &[Breakfast, Snack], portion: [15.0, 45.0, 5.0] },
    Row { id: "potatoes", name: "Potatoes", per_100g: [77.0, 2.0, 17.0, 0.1], category: Produce, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [100.0, 500.0, 25.0] },
    Row { id: "quinoa", name: "Quinoa", per_100g: [120.0, 4.4, 21.0, 1.9], category: Grains, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [100.0, 300.0, 10.0] },
    Row { id: "rice", name: "Rice", per_100g: [130.0, 2.7, 28.0, 0.3], category: Grains, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [100.0, 400.0, 10.0] },
    Row { id: "salmon", name: "Salmon fillet", per_100g: [208.0, 20.0, 0.0, 13.0], category: Seafood, tags: &["fish"], slots: &[Lunch, Dinner], portion: [100.0, 250.0, 10.0] },
    Row { id: "spinach", name: "Spinach", per_100g: [23.0, 2.9, 3.6, 0.4], category: Produce, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [30.0, 200.0, 10.0] },
    Row { id: "tofu", name: "Tofu", per_100g: [144.0, 17.0, 3.0, 8.0], category: Legumes, tags: &["soy", "vegan"], slots: &[Lunch, Dinner], portion: [100.0, 300.0, 10.0] },
    Row { id: "tomatoes", name: "Tomatoes", per_100g: [18.0, 0.9, 3.9, 0.2], category: Produce, tags: &["vegan"], slots: &[Lunch, Dinner], portion: [50.0, 300.0, 10.0] },
    Row { id: "turkey-breast", name: "Turkey breast", per_100g: [135.0, 30.0, 0.0, 1.0], category: Meat, tags: &["meat"], slots: &[Lunch, Dinner], portion: [100.0, 250.0, 10.0] },
    Row { id: "whole-wheat-bread", name: "Whole wheat bread", per_100g: [247.0, 13.0, 41.0, 3.4], category: Bakery, tags: &["gluten", "vegan"], slots: &[Breakfast], portion: [30.0, 150.0, 30.0] },
];

pub(crate) fn sample_items() -> Vec<FoodItem> {
    ROWS.iter()
        .map(|row| {
            FoodItem::new(NewFoodItemProps {
                id: row.id.to_string(),
                name: row.name.to_string(),
                kcal_per_100g: row.per_100g[0],
                protein_per_100g: row.per_100g[1],
                carbs_per_100g: row.per_100g[2],
                fat_per_100g: row.per_100g[3],
                category: row.category,
                tags: row.tags.iter().map(|t| t.to_string()).collect(),
                slots: row.slots.to_vec(),
                portion: PortionRule {
                    min_grams: row.portion[0],
                    max_grams: row.portion[1],
                    step_grams: row.portion[2],
                },
            })
            .expect("fixture rows are valid")
        })
        .collect()
}

pub(crate) fn sample_catalog() -> Arc<FoodCatalog> {
    Arc::new(FoodCatalog::new(sample_items()).expect("fixture ids are unique"))
}

/// A standalone item, handy for hand-built plans.
pub(crate) fn food(id: &str, name: &str, category: FoodCategory) -> Arc<FoodItem> {
    Arc::new(
        FoodItem::new(NewFoodItemProps {
            id: id.to_string(),
            name: name.to_string(),
            kcal_per_100g: 100.0,
            protein_per_100g: 10.0,
            carbs_per_100g: 10.0,
            fat_per_100g: 2.0,
            category,
            tags: vec![],
            slots: SlotType::ALL.to_vec(),
            portion: PortionRule {
                min_grams: 50.0,
                max_grams: 500.0,
                step_grams: 50.0,
            },
        })
        .expect("fixture item is valid"),
    )
}
