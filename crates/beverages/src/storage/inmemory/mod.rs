//! In-memory storage backend.
//!
//! Stores beverages in a `HashMap` and ingredients in a `Vec`, each wrapped
//! in `Arc<RwLock<_>>`. Useful for local development and tests where
//! persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
