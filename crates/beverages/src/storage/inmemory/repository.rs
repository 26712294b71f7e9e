//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use beverages_core::beverage::{
    ingredients_for_beverage, Beverage, BeverageIngredient, BeverageUpdate,
};
use beverages_core::storage::{BeverageRepository, IngredientRepository, RepositoryError, Result};
use beverages_core::translation::Language;

/// In-memory storage backend for development and testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    beverages: Arc<RwLock<HashMap<i64, Beverage>>>,
    ingredients: Arc<RwLock<Vec<BeverageIngredient>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            beverages: Arc::new(RwLock::new(HashMap::new())),
            ingredients: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Adds an ingredient, replacing any existing one with the same
    /// `(beverage_id, ingredient_name)` key.
    #[allow(dead_code)]
    pub async fn put_ingredient(&self, ingredient: BeverageIngredient) {
        let mut ingredients = self.ingredients.write().await;
        ingredients.retain(|existing| {
            existing.beverage_id != ingredient.beverage_id
                || existing.ingredient_name != ingredient.ingredient_name
        });
        ingredients.push(ingredient);
    }
}

#[async_trait]
impl BeverageRepository for InMemoryRepository {
    async fn get_beverage(&self, id: i64) -> Result<Option<Beverage>> {
        let beverages = self.beverages.read().await;
        Ok(beverages.get(&id).cloned())
    }

    async fn list_beverages(&self) -> Result<Vec<Beverage>> {
        let beverages = self.beverages.read().await;
        let mut all: Vec<Beverage> = beverages.values().cloned().collect();
        all.sort_by_key(|b| b.id);
        Ok(all)
    }

    async fn create_beverage(&self, beverage: &Beverage) -> Result<()> {
        let mut beverages = self.beverages.write().await;
        if beverages.contains_key(&beverage.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Beverage",
                id: beverage.id.to_string(),
            });
        }
        beverages.insert(beverage.id, beverage.clone());
        Ok(())
    }

    async fn update_beverage(&self, id: i64, update: &BeverageUpdate) -> Result<()> {
        let mut beverages = self.beverages.write().await;
        let beverage = beverages
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::beverage_not_found(id))?;
        update.apply_to(beverage);
        Ok(())
    }

    async fn merge_translation(&self, id: i64, language: Language, text: &str) -> Result<()> {
        let mut beverages = self.beverages.write().await;
        let beverage = beverages
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::beverage_not_found(id))?;
        beverage
            .translations
            .insert(language.code().to_string(), text.to_string());
        Ok(())
    }
}

#[async_trait]
impl IngredientRepository for InMemoryRepository {
    async fn get_ingredients_for_beverage(
        &self,
        beverage_id: i64,
    ) -> Result<Vec<BeverageIngredient>> {
        let ingredients = self.ingredients.read().await;
        Ok(ingredients_for_beverage(&ingredients, beverage_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
