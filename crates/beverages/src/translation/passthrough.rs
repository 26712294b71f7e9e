//! Local translator for development and tests.

use async_trait::async_trait;

use beverages_core::translation::{Language, Result, Translator};

/// Translator that tags the source text with the target language instead
/// of calling an external service.
///
/// `translate("Hello", en, fr)` returns `"[fr] Hello"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        if source == target {
            return Ok(text.to_string());
        }
        Ok(format!("[{target}] {text}"))
    }
}
