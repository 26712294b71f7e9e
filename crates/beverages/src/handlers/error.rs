use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use beverages_core::storage::{repository_error_to_status_code, RepositoryError};
use beverages_core::translation::{translation_error_to_status_code, TranslationError};

/// Request-shape errors raised by the handlers before any store is touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    #[error("Missing request body")]
    MissingBody,
    #[error("Incorrect type. Must match Beverage schema")]
    InvalidBeverage { details: String },
    #[error("Missing beverage ID in path")]
    MissingBeverageId,
    #[error("Missing beverage ID or request body")]
    MissingUpdateInput,
    #[error("No valid fields provided for update")]
    NoUpdateFields,
    #[error("Missing beverageId in query string")]
    MissingBeverageIdQuery,
    #[error("Invalid query string")]
    InvalidQuery,
    #[error("{0}")]
    NotFound(&'static str),
}

impl RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<RequestError>() {
            return err.status_code();
        }

        let code = if let Some(err) = self.0.downcast_ref::<TranslationError>() {
            translation_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
            json!({
                "message": "Internal Server Error",
                "error": self.0.to_string(),
            })
        } else if let Some(RequestError::InvalidBeverage { details }) =
            self.0.downcast_ref::<RequestError>()
        {
            tracing::warn!(status = %status, details = %details, "Rejected beverage payload");
            json!({
                "message": self.0.to_string(),
                "details": details,
            })
        } else {
            tracing::debug!(status = %status, message = %self.0, "Request error");
            json!({ "message": self.0.to_string() })
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
