use std::collections::HashMap;
use std::sync::Arc;

use super::errors::CatalogError;
use super::model::{CatalogFilter, FoodItem};
use super::value_objects::FoodId;

/// Read-only food reference data.
///
/// Built once from a [`CatalogSource`](super::source::CatalogSource) and then
/// shared behind an `Arc`; nothing mutates it afterwards, so concurrent plan
/// builds read it without locking.
#[derive(Debug)]
pub struct FoodCatalog {
    items: Vec<Arc<FoodItem>>,
    index: HashMap<FoodId, usize>,
}

impl FoodCatalog {
    /// Freezes `items`, ordered by id. Duplicate ids are rejected.
    pub fn new(items: Vec<FoodItem>) -> Result<Self, CatalogError> {
        let mut items = items;
        items.sort_by(|a, b| a.id.cmp(&b.id));

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicatedId(item.id.to_string()));
            }
        }

        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching `filter`, in id order.
    pub fn find(&self, filter: &CatalogFilter) -> Vec<Arc<FoodItem>> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &FoodId) -> Result<Arc<FoodItem>, CatalogError> {
        self.index
            .get(id)
            .map(|position| self.items[*position].clone())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
