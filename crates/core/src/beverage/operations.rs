use super::error::BeverageError;
use super::types::{Beverage, BeverageIngredient};

/// Validates a beverage before creation.
pub fn validate_beverage(beverage: &Beverage) -> Result<(), BeverageError> {
    if beverage.id <= 0 {
        return Err(BeverageError::InvalidId(beverage.id));
    }
    if beverage.name.trim().is_empty() {
        return Err(BeverageError::EmptyName);
    }
    if beverage.name.chars().count() > 100 {
        return Err(BeverageError::NameTooLong);
    }
    if !beverage.price.is_finite() || beverage.price < 0.0 {
        return Err(BeverageError::InvalidPrice(beverage.price));
    }
    Ok(())
}

/// Returns the ingredients of one beverage ordered by ingredient name,
/// matching the sort key order of the ingredients table.
pub fn ingredients_for_beverage(
    ingredients: &[BeverageIngredient],
    beverage_id: i64,
) -> Vec<&BeverageIngredient> {
    let mut matching: Vec<&BeverageIngredient> = ingredients
        .iter()
        .filter(|ingredient| ingredient.beverage_id == beverage_id)
        .collect();
    matching.sort_by(|a, b| a.ingredient_name.cmp(&b.ingredient_name));
    matching
}
