//! Application state with repository-based storage.
//!
//! Holds the repository and translator trait objects shared by all request
//! handlers. The concrete backends are selected at compile time via the
//! storage (`inmemory` / `dynamodb`) and translator (`passthrough` /
//! `amazon-translate`) feature flags.

use std::sync::Arc;

use beverages_core::storage::{BeverageRepository, IngredientRepository};
use beverages_core::translation::Translator;

use crate::config::Config;
use crate::translation::TranslationService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Beverage repository.
    pub beverage_repo: Arc<dyn BeverageRepository>,
    /// Ingredient repository.
    pub ingredient_repo: Arc<dyn IngredientRepository>,
    /// Read-through translation cache over `beverage_repo`.
    pub translations: Arc<TranslationService>,
}

impl AppState {
    /// Creates a new AppState with the given collaborators and configuration.
    pub fn build(
        beverage_repo: Arc<dyn BeverageRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        translator: Arc<dyn Translator>,
        config: &Config,
    ) -> Self {
        let translations = Arc::new(TranslationService::new(
            beverage_repo.clone(),
            translator,
            config.source_language,
            config.cache_write_policy,
        ));

        Self {
            beverage_repo,
            ingredient_repo,
            translations,
        }
    }

    /// Creates AppState from the compiled-in storage and translator backends.
    pub async fn new(config: &Config) -> Self {
        let (beverage_repo, ingredient_repo) = storage::build(config).await;
        let translator = translator::build().await;

        Self::build(beverage_repo, ingredient_repo, translator, config)
    }
}

// ============================================================================
// Storage backend factories
// ============================================================================

#[cfg(feature = "inmemory")]
mod storage {
    use super::*;
    use crate::storage::InMemoryRepository;

    pub async fn build(
        _config: &Config,
    ) -> (Arc<dyn BeverageRepository>, Arc<dyn IngredientRepository>) {
        tracing::info!("Using in-memory storage");
        let repo = Arc::new(InMemoryRepository::new());
        (repo.clone(), repo)
    }
}

#[cfg(feature = "dynamodb")]
mod storage {
    use super::*;
    use crate::storage::DynamoDbRepository;

    pub async fn build(
        config: &Config,
    ) -> (Arc<dyn BeverageRepository>, Arc<dyn IngredientRepository>) {
        tracing::info!(
            table = %config.table_name,
            ingredients_table = %config.ingredients_table_name,
            "Using DynamoDB storage"
        );
        let repo = Arc::new(
            DynamoDbRepository::from_env(
                config.table_name.clone(),
                config.ingredients_table_name.clone(),
            )
            .await,
        );
        (repo.clone(), repo)
    }
}

// ============================================================================
// Translator backend factories
// ============================================================================

#[cfg(feature = "passthrough")]
mod translator {
    use super::*;
    use crate::translation::PassthroughTranslator;

    pub async fn build() -> Arc<dyn Translator> {
        tracing::info!("Using passthrough translator");
        Arc::new(PassthroughTranslator::new())
    }
}

#[cfg(feature = "amazon-translate")]
mod translator {
    use super::*;
    use crate::translation::AmazonTranslator;

    pub async fn build() -> Arc<dyn Translator> {
        tracing::info!("Using Amazon Translate");
        Arc::new(AmazonTranslator::from_env().await)
    }
}

