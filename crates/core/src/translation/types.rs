use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Response body of the translation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedBeverage {
    pub id: i64,
    pub name: String,
    pub translated_text: String,
}

/// What to do when caching a fresh translation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheWritePolicy {
    /// Log the failure and still return the translated text.
    #[default]
    BestEffort,
    /// Fail the request.
    Required,
}

impl FromStr for CacheWritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best-effort" | "best_effort" => Ok(Self::BestEffort),
            "required" => Ok(Self::Required),
            other => Err(format!("Unknown cache write policy: {other}")),
        }
    }
}
