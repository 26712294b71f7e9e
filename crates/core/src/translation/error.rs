use thiserror::Error;

use crate::storage::RepositoryError;

use super::Language;

/// Errors surfaced by the translation endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The requested target language is not supported. Holds the raw input.
    #[error(
        "Invalid target language. Supported languages: {}",
        Language::supported_codes()
    )]
    InvalidArgument(String),
    #[error("Beverage not found")]
    NotFound(i64),
    /// A store or translation service failure. Holds the underlying detail.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for TranslationError {
    fn from(err: RepositoryError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslationError>;
