use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use beverages_core::beverage::BeverageIngredient;

use crate::{
    handlers::{AppError, DataResponse, RequestError},
    state::AppState,
};

/// Query parameters for listing ingredients.
#[derive(Debug, Deserialize)]
pub struct IngredientsQuery {
    #[serde(rename = "beverageId")]
    pub beverage_id: Option<String>,
}

/// List a beverage's ingredients (GET /beverages/ingredients?beverageId=N).
pub async fn list_ingredients(
    State(state): State<AppState>,
    query: Result<Query<IngredientsQuery>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<BeverageIngredient>>>, AppError> {
    let beverage_id = query
        .ok()
        .and_then(|Query(q)| q.beverage_id)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .ok_or(RequestError::MissingBeverageIdQuery)?;

    let ingredients = state
        .ingredient_repo
        .get_ingredients_for_beverage(beverage_id)
        .await?;

    if ingredients.is_empty() {
        return Err(RequestError::NotFound("No ingredients found for this beverage").into());
    }

    Ok(Json(DataResponse::new(ingredients)))
}
