use async_trait::async_trait;

use super::{Language, Result};

/// An external text-translation provider.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` from `source` into `target`.
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;
}
