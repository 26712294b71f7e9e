//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use beverages_core::beverage::{Beverage, BeverageIngredient, BeverageUpdate};
use beverages_core::storage::RepositoryError;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_IS_CARBONATED: &str = "isCarbonated";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_PRICE: &str = "price";
pub const ATTR_IS_ACTIVE: &str = "isActive";
pub const ATTR_TRANSLATIONS: &str = "translations";

pub const ATTR_BEVERAGE_ID: &str = "beverageId";
pub const ATTR_INGREDIENT_NAME: &str = "ingredientName";
pub const ATTR_QUANTITY: &str = "quantity";
pub const ATTR_NOTES: &str = "notes";

// ============================================================================
// Beverage conversions
// ============================================================================

/// Convert a Beverage to DynamoDB item.
pub fn beverage_to_item(beverage: &Beverage) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), number(beverage.id));
    item.insert(
        ATTR_NAME.to_string(),
        AttributeValue::S(beverage.name.clone()),
    );
    item.insert(
        ATTR_IS_CARBONATED.to_string(),
        AttributeValue::Bool(beverage.is_carbonated),
    );
    item.insert(
        ATTR_DESCRIPTION.to_string(),
        AttributeValue::S(beverage.description.clone()),
    );
    item.insert(ATTR_PRICE.to_string(), number(beverage.price));
    item.insert(
        ATTR_IS_ACTIVE.to_string(),
        AttributeValue::Bool(beverage.is_active),
    );

    let translations = beverage
        .translations
        .iter()
        .map(|(code, text)| (code.clone(), AttributeValue::S(text.clone())))
        .collect();
    item.insert(
        ATTR_TRANSLATIONS.to_string(),
        AttributeValue::M(translations),
    );

    item
}

/// Convert a DynamoDB item to Beverage.
///
/// A missing `translations` attribute reads as an empty map.
pub fn item_to_beverage(
    item: &HashMap<String, AttributeValue>,
) -> Result<Beverage, RepositoryError> {
    Ok(Beverage {
        id: get_i64(item, ATTR_ID)?,
        name: get_string(item, ATTR_NAME)?,
        is_carbonated: get_bool(item, ATTR_IS_CARBONATED)?,
        description: get_optional_string(item, ATTR_DESCRIPTION).unwrap_or_default(),
        price: get_f64(item, ATTR_PRICE)?,
        is_active: get_bool(item, ATTR_IS_ACTIVE)?,
        translations: get_string_map(item, ATTR_TRANSLATIONS)?,
    })
}

// ============================================================================
// Ingredient conversions
// ============================================================================

/// Convert a BeverageIngredient to DynamoDB item.
#[cfg(test)]
pub fn ingredient_to_item(ingredient: &BeverageIngredient) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        ATTR_BEVERAGE_ID.to_string(),
        number(ingredient.beverage_id),
    );
    item.insert(
        ATTR_INGREDIENT_NAME.to_string(),
        AttributeValue::S(ingredient.ingredient_name.clone()),
    );
    item.insert(
        ATTR_QUANTITY.to_string(),
        AttributeValue::S(ingredient.quantity.clone()),
    );
    item.insert(
        ATTR_NOTES.to_string(),
        AttributeValue::S(ingredient.notes.clone()),
    );

    item
}

/// Convert a DynamoDB item to BeverageIngredient.
pub fn item_to_ingredient(
    item: &HashMap<String, AttributeValue>,
) -> Result<BeverageIngredient, RepositoryError> {
    Ok(BeverageIngredient {
        beverage_id: get_i64(item, ATTR_BEVERAGE_ID)?,
        ingredient_name: get_string(item, ATTR_INGREDIENT_NAME)?,
        quantity: get_optional_string(item, ATTR_QUANTITY).unwrap_or_default(),
        notes: get_optional_string(item, ATTR_NOTES).unwrap_or_default(),
    })
}

// ============================================================================
// Update expressions
// ============================================================================

/// The pieces of an `UpdateItem` request built from a [`BeverageUpdate`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParts {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build a `SET` expression covering only the fields present in `update`.
///
/// Returns `None` when the update carries no fields.
pub fn update_parts(update: &BeverageUpdate) -> Option<UpdateParts> {
    let mut clauses = Vec::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    let mut set = |attr: &str, value: AttributeValue| {
        clauses.push(format!("#{attr} = :{attr}"));
        names.insert(format!("#{attr}"), attr.to_string());
        values.insert(format!(":{attr}"), value);
    };

    if let Some(name) = &update.name {
        set(ATTR_NAME, AttributeValue::S(name.clone()));
    }
    if let Some(price) = update.price {
        set(ATTR_PRICE, number(price));
    }
    if let Some(is_carbonated) = update.is_carbonated {
        set(ATTR_IS_CARBONATED, AttributeValue::Bool(is_carbonated));
    }
    if let Some(description) = &update.description {
        set(ATTR_DESCRIPTION, AttributeValue::S(description.clone()));
    }

    if clauses.is_empty() {
        return None;
    }

    Some(UpdateParts {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Encode a number attribute.
pub fn number(value: impl ToString) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get the raw text of a required number attribute.
fn get_number<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Result<&'a str, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .map(String::as_str)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid integer {}: {}", key, e)))
}

/// Get a required floating point attribute.
fn get_f64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<f64, RepositoryError> {
    let n = get_number(item, key)?;
    n.parse()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid number {}: {}", key, e)))
}

/// Get an optional map of string attributes. Missing reads as empty.
fn get_string_map(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<BTreeMap<String, String>, RepositoryError> {
    let Some(value) = item.get(key) else {
        return Ok(BTreeMap::new());
    };
    let map = value
        .as_m()
        .map_err(|_| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    map.iter()
        .map(|(code, text)| {
            text.as_s()
                .map(|s| (code.clone(), s.clone()))
                .map_err(|_| {
                    RepositoryError::InvalidData(format!("Invalid {} entry: {}", key, code))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beverages_core::translation::Language;

    fn sample_beverage() -> Beverage {
        Beverage::new(
            1001,
            "Coca-Cola",
            "A sweet carbonated beverage by The Coca-Cola Company.",
        )
        .with_price(1.5)
        .carbonated()
        .with_translation(Language::Fr, "Une boisson gazeuse sucrée.")
    }

    #[test]
    fn test_beverage_round_trip() {
        let beverage = sample_beverage();
        let item = beverage_to_item(&beverage);
        let parsed = item_to_beverage(&item).unwrap();

        assert_eq!(beverage, parsed);
    }

    #[test]
    fn test_beverage_item_attribute_types() {
        let item = beverage_to_item(&sample_beverage());

        assert_eq!(item.get("id").unwrap().as_n().unwrap(), "1001");
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "1.5");
        assert!(*item.get("isCarbonated").unwrap().as_bool().unwrap());
        assert_eq!(
            item.get("translations")
                .unwrap()
                .as_m()
                .unwrap()
                .get("fr")
                .unwrap()
                .as_s()
                .unwrap(),
            "Une boisson gazeuse sucrée."
        );
    }

    #[test]
    fn test_item_without_translations_reads_empty_map() {
        let mut item = beverage_to_item(&sample_beverage());
        item.remove("translations");

        let parsed = item_to_beverage(&item).unwrap();

        assert!(parsed.translations.is_empty());
    }

    #[test]
    fn test_integral_price_is_parsed() {
        let mut item = beverage_to_item(&sample_beverage());
        item.insert("price".to_string(), AttributeValue::N("2".to_string()));

        assert_eq!(item_to_beverage(&item).unwrap().price, 2.0);
    }

    #[test]
    fn test_missing_name_is_invalid_data() {
        let mut item = beverage_to_item(&sample_beverage());
        item.remove("name");

        assert_eq!(
            item_to_beverage(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string()
            ))
        );
    }

    #[test]
    fn test_non_string_translation_is_invalid_data() {
        let mut item = beverage_to_item(&sample_beverage());
        item.insert(
            "translations".to_string(),
            AttributeValue::M(HashMap::from([(
                "de".to_string(),
                AttributeValue::N("1".to_string()),
            )])),
        );

        assert!(matches!(
            item_to_beverage(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_ingredient_round_trip() {
        let ingredient = BeverageIngredient::new(1001, "Sugar", "40g", "Sweetener");
        let item = ingredient_to_item(&ingredient);

        assert_eq!(item.get("beverageId").unwrap().as_n().unwrap(), "1001");
        assert_eq!(item_to_ingredient(&item).unwrap(), ingredient);
    }

    #[test]
    fn test_update_parts_only_present_fields() {
        let update = BeverageUpdate {
            name: Some("Coke".to_string()),
            is_carbonated: Some(false),
            ..Default::default()
        };

        let parts = update_parts(&update).unwrap();

        assert_eq!(parts.expression, "SET #name = :name, #isCarbonated = :isCarbonated");
        assert_eq!(parts.names.get("#name").unwrap(), "name");
        assert_eq!(parts.names.len(), 2);
        assert_eq!(
            parts.values.get(":isCarbonated").unwrap(),
            &AttributeValue::Bool(false)
        );
        assert!(!parts.names.values().any(|n| n == "translations"));
    }

    #[test]
    fn test_update_parts_empty_update() {
        assert_eq!(update_parts(&BeverageUpdate::default()), None);
    }
}
