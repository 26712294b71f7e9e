//! Cached translation writes.
//!
//! Items written before the `translations` attribute existed have no map to
//! set a nested key on. DynamoDB rejects `SET #translations.#lang` on those
//! with a `ValidationException`, so a merge runs as a short sequence:
//!
//! 1. `Nested`: set `translations.<lang>` on an existing item
//! 2. `Initialise`: create the map with one entry, only if it is still absent
//! 3. `RetryNested`: another writer created the map first, set the key again

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use beverages_core::translation::Language;

use super::conversions::{UpdateParts, ATTR_ID, ATTR_TRANSLATIONS};

/// A conditional `UpdateItem` writing one cached translation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationWrite {
    pub update: UpdateParts,
    pub condition: &'static str,
}

/// Why a translation write was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFailure {
    /// The nested path does not exist on the item.
    MissingMap,
    /// The condition expression did not hold.
    ConditionFailed,
    Other,
}

/// One step of a translation merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStep {
    Nested,
    Initialise,
    RetryNested,
}

impl MergeStep {
    /// The request issued at this step.
    pub fn write(self, language: Language, text: &str) -> TranslationWrite {
        match self {
            MergeStep::Nested | MergeStep::RetryNested => nested_write(language, text),
            MergeStep::Initialise => initialise_write(language, text),
        }
    }

    /// The step to try after `failure`, or `None` when the failure is final.
    pub fn next(self, failure: WriteFailure) -> Option<MergeStep> {
        match (self, failure) {
            (MergeStep::Nested, WriteFailure::MissingMap) => Some(MergeStep::Initialise),
            (MergeStep::Initialise, WriteFailure::ConditionFailed) => Some(MergeStep::RetryNested),
            _ => None,
        }
    }
}

/// `SET #translations.#lang = :text` on an item that exists.
fn nested_write(language: Language, text: &str) -> TranslationWrite {
    TranslationWrite {
        update: UpdateParts {
            expression: "SET #translations.#lang = :text".to_string(),
            names: HashMap::from([
                ("#id".to_string(), ATTR_ID.to_string()),
                ("#translations".to_string(), ATTR_TRANSLATIONS.to_string()),
                ("#lang".to_string(), language.code().to_string()),
            ]),
            values: HashMap::from([(":text".to_string(), AttributeValue::S(text.to_string()))]),
        },
        condition: "attribute_exists(#id)",
    }
}

/// `SET #translations = {lang: text}` on an item that exists without a map.
fn initialise_write(language: Language, text: &str) -> TranslationWrite {
    let translations = HashMap::from([(
        language.code().to_string(),
        AttributeValue::S(text.to_string()),
    )]);

    TranslationWrite {
        update: UpdateParts {
            expression: "SET #translations = :translations".to_string(),
            names: HashMap::from([
                ("#id".to_string(), ATTR_ID.to_string()),
                ("#translations".to_string(), ATTR_TRANSLATIONS.to_string()),
            ]),
            values: HashMap::from([(
                ":translations".to_string(),
                AttributeValue::M(translations),
            )]),
        },
        condition: "attribute_exists(#id) AND attribute_not_exists(#translations)",
    }
}
