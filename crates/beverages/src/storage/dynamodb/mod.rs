//! DynamoDB storage backend.
//!
//! Beverages live in one table keyed by `id` (Number). Ingredients live in a
//! second table with partition key `beverageId` (Number) and sort key
//! `ingredientName` (String). Cached translations are a nested
//! `translations` map attribute on the beverage item.

mod conversions;
mod error;
mod repository;
mod translations;

pub use repository::DynamoDbRepository;
