use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::translation::Language;

/// Text used as translation input when a beverage has no description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";

/// Name reported for a beverage whose name is empty.
pub const UNKNOWN_BEVERAGE_NAME: &str = "Unknown Beverage";

/// A beverage record.
///
/// `translations` maps a language code to previously computed translated
/// text. Entries are only ever added, by the translation cache handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beverage {
    pub id: i64,
    pub name: String,
    pub is_carbonated: bool,
    pub description: String,
    pub price: f64,
    pub is_active: bool,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl Beverage {
    /// Creates an active, non-carbonated beverage with no cached translations.
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_carbonated: false,
            description: description.into(),
            price: 0.0,
            is_active: true,
            translations: BTreeMap::new(),
        }
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Marks the beverage as carbonated.
    pub fn carbonated(mut self) -> Self {
        self.is_carbonated = true;
        self
    }

    /// Adds a cached translation (useful for testing).
    pub fn with_translation(mut self, language: Language, text: impl Into<String>) -> Self {
        self.translations
            .insert(language.code().to_string(), text.into());
        self
    }

    /// Returns the cached translation for `language`, if any.
    pub fn cached_translation(&self, language: Language) -> Option<&str> {
        self.translations.get(language.code()).map(String::as_str)
    }

    /// The text handed to the translator.
    pub fn source_text(&self) -> &str {
        if self.description.is_empty() {
            NO_DESCRIPTION_PLACEHOLDER
        } else {
            &self.description
        }
    }

    /// The name reported in translation responses.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_BEVERAGE_NAME
        } else {
            &self.name
        }
    }
}

/// An ingredient of a beverage, keyed by `(beverage_id, ingredient_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageIngredient {
    pub beverage_id: i64,
    pub ingredient_name: String,
    pub quantity: String,
    pub notes: String,
}

impl BeverageIngredient {
    pub fn new(
        beverage_id: i64,
        ingredient_name: impl Into<String>,
        quantity: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            beverage_id,
            ingredient_name: ingredient_name.into(),
            quantity: quantity.into(),
            notes: notes.into(),
        }
    }
}
