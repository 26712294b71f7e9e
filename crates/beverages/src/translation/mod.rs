//! Translator backends and the read-through translation cache.
//!
//! # Feature Flags
//!
//! - `passthrough` (default): local translator that tags text with the target language
//! - `amazon-translate`: Amazon Translate via `aws-sdk-translate`
//!
//! These features are mutually exclusive.

#[cfg(all(feature = "passthrough", feature = "amazon-translate"))]
compile_error!(
    "Features 'passthrough' and 'amazon-translate' are mutually exclusive. \
    Enable only one translator backend at a time."
);

#[cfg(not(any(feature = "passthrough", feature = "amazon-translate")))]
compile_error!(
    "No translator backend selected. Enable 'passthrough' or 'amazon-translate' feature. \
    Example: cargo build -p beverages --features amazon-translate"
);

#[cfg(feature = "amazon-translate")]
mod amazon;
mod passthrough;
mod service;

#[cfg(feature = "amazon-translate")]
pub use amazon::AmazonTranslator;
#[cfg_attr(not(feature = "passthrough"), allow(unused_imports))]
pub use passthrough::PassthroughTranslator;
pub use service::TranslationService;
