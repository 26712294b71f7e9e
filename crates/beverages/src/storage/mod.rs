//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `beverages_core::storage`, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory storage, lost on restart
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with DynamoDB and Amazon Translate:
//! ```bash
//! cargo build -p beverages --no-default-features --features dynamodb,amazon-translate
//! ```

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p beverages --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
#[cfg_attr(not(feature = "inmemory"), allow(unused_imports))]
pub use inmemory::InMemoryRepository;
