use std::{env, time::Duration};

use beverages_core::translation::{CacheWritePolicy, Language};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Beverages table name (default: "Beverages")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Ingredients table name (default: "BeverageIngredients")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub ingredients_table_name: String,
    /// Language hint passed to the translator (default: en)
    pub source_language: Language,
    /// Behavior when caching a fresh translation fails (default: best-effort)
    pub cache_write_policy: CacheWritePolicy,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Beverages table (default: "Beverages")
    /// - `INGREDIENTS_TABLE_NAME` - Ingredients table (default: "BeverageIngredients")
    /// - `SOURCE_LANGUAGE` - Source language hint (default: "en")
    /// - `TRANSLATION_CACHE_WRITE` - "best-effort" or "required" (default: "best-effort")
    /// - `REQUEST_TIMEOUT_SECONDS` - Router timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "Beverages".to_string()),
            ingredients_table_name: env::var("INGREDIENTS_TABLE_NAME")
                .unwrap_or_else(|_| "BeverageIngredients".to_string()),
            source_language: env::var("SOURCE_LANGUAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Language::En),
            cache_write_policy: env::var("TRANSLATION_CACHE_WRITE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "Beverages".to_string(),
            ingredients_table_name: "BeverageIngredients".to_string(),
            source_language: Language::En,
            cache_write_policy: CacheWritePolicy::BestEffort,
            request_timeout_seconds: 10,
        }
    }
}
