//! Request payload types for beverage operations.
//!
//! Pure data types with no I/O, shared by every storage backend.

use serde::{Deserialize, Deserializer, Serialize};

use super::types::Beverage;

/// Partial update of a beverage.
///
/// Only the fields present are written. `translations` and `isActive` are
/// never touched by an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageUpdate {
    #[serde(
        default,
        deserialize_with = "non_blank_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_carbonated: Option<bool>,
    #[serde(
        default,
        deserialize_with = "non_blank_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl BeverageUpdate {
    /// Returns true if no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.is_carbonated.is_none()
            && self.description.is_none()
    }

    /// Applies the update to an existing beverage.
    pub fn apply_to(&self, beverage: &mut Beverage) {
        if let Some(name) = &self.name {
            beverage.name = name.clone();
        }
        if let Some(price) = self.price {
            beverage.price = price;
        }
        if let Some(is_carbonated) = self.is_carbonated {
            beverage.is_carbonated = is_carbonated;
        }
        if let Some(description) = &self.description {
            beverage.description = description.clone();
        }
    }
}

/// Empty or whitespace-only strings deserialize as `None`.
fn non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
