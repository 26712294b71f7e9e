//! Pure function for mapping translation errors to HTTP status codes.

use super::TranslationError;

/// Maps a [`TranslationError`] to an HTTP status code.
///
/// - `InvalidArgument` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Internal` -> 500 (Internal Server Error)
pub fn translation_error_to_status_code(error: &TranslationError) -> u16 {
    match error {
        TranslationError::InvalidArgument(_) => 400,
        TranslationError::NotFound(_) => 404,
        TranslationError::Internal(_) => 500,
    }
}
