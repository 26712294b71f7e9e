pub mod beverages;
pub mod error;
pub mod health;
pub mod ingredients;
pub mod translation;

use serde::Serialize;

pub use error::{AppError, RequestError};

/// `{"data": ...}` success envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"message": ...}` success envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
