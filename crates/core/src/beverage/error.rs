use thiserror::Error;

/// Errors that can occur when validating a beverage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BeverageError {
    #[error("Beverage id must be a positive integer, got {0}")]
    InvalidId(i64),
    #[error("Beverage name cannot be empty")]
    EmptyName,
    #[error("Beverage name too long (max 100 characters)")]
    NameTooLong,
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
}
