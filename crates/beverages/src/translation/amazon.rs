//! Amazon Translate backend.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_translate::error::SdkError;
use aws_sdk_translate::operation::translate_text::TranslateTextError;
use aws_sdk_translate::Client;

use beverages_core::translation::{Language, Result, TranslationError, Translator};

/// Translator backed by Amazon Translate's `TranslateText` operation.
pub struct AmazonTranslator {
    client: Client,
}

impl AmazonTranslator {
    /// Creates a translator with the given client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a translator using the AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl Translator for AmazonTranslator {
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source.code())
            .target_language_code(target.code())
            .send()
            .await
            .map_err(map_translate_text_error)?;

        Ok(output.translated_text)
    }
}

/// Map a TranslateText SDK error to TranslationError.
fn map_translate_text_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<TranslateTextError, R>,
) -> TranslationError {
    let detail = match err.into_service_error() {
        TranslateTextError::TooManyRequestsException(_) => {
            "Translate request limit exceeded".to_string()
        }
        TranslateTextError::ServiceUnavailableException(_) => {
            "Translate service unavailable".to_string()
        }
        TranslateTextError::InternalServerException(_) => {
            "Translate internal server error".to_string()
        }
        TranslateTextError::TextSizeLimitExceededException(_) => {
            "Source text exceeds the Translate size limit".to_string()
        }
        TranslateTextError::UnsupportedLanguagePairException(_) => {
            "Unsupported language pair".to_string()
        }
        err => format!("TranslateText failed: {:?}", err),
    };
    TranslationError::Internal(detail)
}
