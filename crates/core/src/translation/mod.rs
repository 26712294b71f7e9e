mod error;
mod http_mapping;
mod language;
mod traits;
mod types;

pub use error::{Result, TranslationError};
pub use http_mapping::translation_error_to_status_code;
pub use language::Language;
pub use traits::Translator;
pub use types::{CacheWritePolicy, TranslatedBeverage};
