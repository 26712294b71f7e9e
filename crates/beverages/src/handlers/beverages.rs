//! Beverage CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use beverages_core::beverage::{validate_beverage, Beverage, BeverageUpdate};

use crate::{
    handlers::{AppError, DataResponse, MessageResponse, RequestError},
    state::AppState,
};

/// List all beverages (GET /beverages).
pub async fn list_beverages(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Beverage>>>, AppError> {
    let beverages = state.beverage_repo.list_beverages().await?;

    if beverages.is_empty() {
        return Err(RequestError::NotFound("No beverages found").into());
    }

    Ok(Json(DataResponse::new(beverages)))
}

/// Create a beverage (POST /beverages).
///
/// Any `translations` in the payload are discarded.
pub async fn create_beverage(
    State(state): State<AppState>,
    payload: Result<Json<Beverage>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(mut beverage) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(err) => RequestError::InvalidBeverage {
            details: err.body_text(),
        },
        _ => RequestError::MissingBody,
    })?;

    // Cached translations are only written by the translation endpoint.
    beverage.translations.clear();

    validate_beverage(&beverage).map_err(|err| RequestError::InvalidBeverage {
        details: err.to_string(),
    })?;

    state.beverage_repo.create_beverage(&beverage).await?;

    tracing::info!(beverage_id = beverage.id, name = %beverage.name, "Created beverage");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Beverage added successfully")),
    ))
}

/// Get a single beverage (GET /beverages/{beverageId}).
pub async fn get_beverage(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DataResponse<Beverage>>, AppError> {
    let Path(id) = id.map_err(|_| RequestError::MissingBeverageId)?;

    let beverage = state
        .beverage_repo
        .get_beverage(id)
        .await?
        .ok_or(RequestError::NotFound("Beverage not found"))?;

    Ok(Json(DataResponse::new(beverage)))
}

/// Partially update a beverage (PUT /beverages/{beverageId}).
///
/// Only `name`, `price`, `isCarbonated` and `description` are applied.
pub async fn update_beverage(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BeverageUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let (Ok(Path(id)), Ok(Json(update))) = (id, payload) else {
        return Err(RequestError::MissingUpdateInput.into());
    };

    if update.is_empty() {
        return Err(RequestError::NoUpdateFields.into());
    }

    state.beverage_repo.update_beverage(id, &update).await?;

    tracing::info!(beverage_id = id, "Updated beverage");

    Ok(Json(MessageResponse::new("Beverage updated successfully")))
}
