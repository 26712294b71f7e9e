use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use beverages_core::translation::TranslatedBeverage;

use crate::{
    handlers::{AppError, RequestError},
    state::AppState,
};

const DEFAULT_LANGUAGE: &str = "fr";

/// Query parameters for the translation endpoint.
#[derive(Debug, Deserialize)]
pub struct TranslationQuery {
    /// Target language code; missing or empty means "fr"
    pub language: Option<String>,
}

impl TranslationQuery {
    fn target_language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|language| !language.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Get a beverage's description in another language
/// (GET /beverages/{beverageId}/translation?language=L).
///
/// Served from the beverage's cached translations when present, otherwise
/// translated and cached.
pub async fn get_translation(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<TranslationQuery>, QueryRejection>,
) -> Result<Json<TranslatedBeverage>, AppError> {
    let Path(id) = id.map_err(|_| RequestError::MissingBeverageId)?;
    let Query(query) = query.map_err(|_| RequestError::InvalidQuery)?;

    let translated = state
        .translations
        .get_translated_text(id, query.target_language())
        .await?;

    Ok(Json(translated))
}
