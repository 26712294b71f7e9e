//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `beverages_core::storage` using two
//! tables: beverages keyed by `id` (Number) and ingredients keyed by
//! `beverageId` (Number) + `ingredientName` (String).

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use beverages_core::beverage::{Beverage, BeverageIngredient, BeverageUpdate};
use beverages_core::storage::{BeverageRepository, IngredientRepository, RepositoryError, Result};
use beverages_core::translation::Language;

use super::conversions::{
    beverage_to_item, item_to_beverage, item_to_ingredient, number, update_parts,
    ATTR_BEVERAGE_ID, ATTR_ID,
};
use super::error::{
    is_conditional_check_failed, is_validation_error, map_get_item_error, map_put_item_error,
    map_query_error, map_scan_error, map_update_item_error,
};
use super::translations::{MergeStep, WriteFailure};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    ingredients_table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table names.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        ingredients_table_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            ingredients_table_name: ingredients_table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(
        table_name: impl Into<String>,
        ingredients_table_name: impl Into<String>,
    ) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name, ingredients_table_name)
    }
}

// ============================================================================
// BeverageRepository implementation
// ============================================================================

#[async_trait]
impl BeverageRepository for DynamoDbRepository {
    async fn get_beverage(&self, id: i64) -> Result<Option<Beverage>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, number(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_beverage(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_beverages(&self) -> Result<Vec<Beverage>> {
        let mut beverages = Vec::new();
        let mut start_key = None;

        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in page.items.unwrap_or_default() {
                beverages.push(item_to_beverage(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(beverages)
    }

    async fn create_beverage(&self, beverage: &Beverage) -> Result<()> {
        let item = beverage_to_item(beverage);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", ATTR_ID)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Beverage", beverage.id.to_string()))?;

        Ok(())
    }

    async fn update_beverage(&self, id: i64, update: &BeverageUpdate) -> Result<()> {
        let parts = update_parts(update).ok_or_else(|| {
            RepositoryError::InvalidData("No valid fields provided for update".to_string())
        })?;

        let mut names = parts.names;
        names.insert("#id".to_string(), ATTR_ID.to_string());

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, number(id))
            .update_expression(parts.expression)
            .condition_expression("attribute_exists(#id)")
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(parts.values))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "Beverage", id.to_string()))?;

        Ok(())
    }

    async fn merge_translation(&self, id: i64, language: Language, text: &str) -> Result<()> {
        let mut step = MergeStep::Nested;

        loop {
            let write = step.write(language, text);

            let result = self
                .client
                .update_item()
                .table_name(&self.table_name)
                .key(ATTR_ID, number(id))
                .update_expression(write.update.expression)
                .condition_expression(write.condition)
                .set_expression_attribute_names(Some(write.update.names))
                .set_expression_attribute_values(Some(write.update.values))
                .send()
                .await;

            let err = match result {
                Ok(_) => return Ok(()),
                Err(err) => err,
            };

            let failure = if is_validation_error(&err) {
                WriteFailure::MissingMap
            } else if is_conditional_check_failed(&err) {
                WriteFailure::ConditionFailed
            } else {
                WriteFailure::Other
            };

            match step.next(failure) {
                Some(next) => {
                    tracing::debug!(
                        beverage_id = id,
                        ?failure,
                        ?next,
                        "Retrying translation write"
                    );
                    step = next;
                }
                None => return Err(map_update_item_error(err, "Beverage", id.to_string())),
            }
        }
    }
}

// ============================================================================
// IngredientRepository implementation
// ============================================================================

#[async_trait]
impl IngredientRepository for DynamoDbRepository {
    async fn get_ingredients_for_beverage(
        &self,
        beverage_id: i64,
    ) -> Result<Vec<BeverageIngredient>> {
        let mut ingredients = Vec::new();
        let mut start_key = None;

        loop {
            let page = self
                .client
                .query()
                .table_name(&self.ingredients_table_name)
                .key_condition_expression("#beverageId = :b")
                .expression_attribute_names("#beverageId", ATTR_BEVERAGE_ID)
                .expression_attribute_values(":b", number(beverage_id))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in page.items.unwrap_or_default() {
                ingredients.push(item_to_ingredient(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(ingredients)
    }
}
