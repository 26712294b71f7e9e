use async_trait::async_trait;

use crate::beverage::{Beverage, BeverageIngredient, BeverageUpdate};
use crate::translation::Language;

use super::Result;

/// Repository for beverage operations.
#[async_trait]
pub trait BeverageRepository: Send + Sync {
    /// Gets a beverage by its ID.
    async fn get_beverage(&self, id: i64) -> Result<Option<Beverage>>;

    /// Gets every beverage in the table.
    async fn list_beverages(&self) -> Result<Vec<Beverage>>;

    /// Creates a new beverage. Fails with `AlreadyExists` if the ID is taken.
    async fn create_beverage(&self, beverage: &Beverage) -> Result<()>;

    /// Writes the fields present in `update`. Fails with `NotFound` if the
    /// beverage does not exist.
    async fn update_beverage(&self, id: i64, update: &BeverageUpdate) -> Result<()>;

    /// Sets `translations[language]` without touching any other field or
    /// cached language.
    async fn merge_translation(&self, id: i64, language: Language, text: &str) -> Result<()>;
}

/// Repository for beverage ingredient operations.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Gets all ingredients of a beverage, ordered by ingredient name.
    async fn get_ingredients_for_beverage(
        &self,
        beverage_id: i64,
    ) -> Result<Vec<BeverageIngredient>>;
}
