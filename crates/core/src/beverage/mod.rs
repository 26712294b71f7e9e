mod error;
mod operations;
mod requests;
mod types;

pub use error::BeverageError;
pub use operations::{ingredients_for_beverage, validate_beverage};
pub use requests::BeverageUpdate;
pub use types::{Beverage, BeverageIngredient, NO_DESCRIPTION_PLACEHOLDER, UNKNOWN_BEVERAGE_NAME};
