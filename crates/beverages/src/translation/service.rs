//! Read-through translation cache.
//!
//! Serves translations from a beverage's `translations` map and fills the
//! map from the translator on a miss:
//!
//! - **Hit**: return the cached text, no translator call, no write
//! - **Miss**: translate, merge the result into the record, return it

use std::sync::Arc;

use beverages_core::storage::BeverageRepository;
use beverages_core::translation::{
    CacheWritePolicy, Language, Result, TranslatedBeverage, TranslationError, Translator,
};

/// Translation cache handler.
///
/// Holds the store and translator as injected collaborators so tests can
/// substitute doubles for both.
pub struct TranslationService {
    repository: Arc<dyn BeverageRepository>,
    translator: Arc<dyn Translator>,
    source_language: Language,
    write_policy: CacheWritePolicy,
}

impl TranslationService {
    /// Creates a new service.
    ///
    /// # Arguments
    ///
    /// * `repository` - Store holding the beverage records and their caches
    /// * `translator` - External translation provider
    /// * `source_language` - Language hint passed with every translation
    /// * `write_policy` - Whether a failed cache write fails the request
    pub fn new(
        repository: Arc<dyn BeverageRepository>,
        translator: Arc<dyn Translator>,
        source_language: Language,
        write_policy: CacheWritePolicy,
    ) -> Self {
        Self {
            repository,
            translator,
            source_language,
            write_policy,
        }
    }

    /// Returns the beverage's description translated into `target_language`.
    ///
    /// The language is validated before the store is touched.
    pub async fn get_translated_text(
        &self,
        beverage_id: i64,
        target_language: &str,
    ) -> Result<TranslatedBeverage> {
        let language: Language = target_language.parse()?;

        let beverage = self
            .repository
            .get_beverage(beverage_id)
            .await?
            .ok_or(TranslationError::NotFound(beverage_id))?;

        if let Some(cached) = beverage.cached_translation(language) {
            tracing::trace!(beverage_id, %language, "Translation cache hit");
            return Ok(TranslatedBeverage {
                id: beverage.id,
                name: beverage.display_name().to_string(),
                translated_text: cached.to_string(),
            });
        }

        tracing::debug!(beverage_id, %language, "Translation cache miss");
        let translated = self
            .translator
            .translate(beverage.source_text(), self.source_language, language)
            .await?;

        if let Err(err) = self
            .repository
            .merge_translation(beverage_id, language, &translated)
            .await
        {
            match self.write_policy {
                CacheWritePolicy::BestEffort => {
                    tracing::warn!(
                        beverage_id,
                        %language,
                        error = %err,
                        "Failed to cache translation"
                    );
                }
                CacheWritePolicy::Required => return Err(err.into()),
            }
        }

        Ok(TranslatedBeverage {
            id: beverage.id,
            name: beverage.display_name().to_string(),
            translated_text: translated,
        })
    }
}
