//! Functional core for the beverages API.
//!
//! Domain types, pure validation functions, and the repository and
//! translator traits the server crate implements. Nothing in this crate
//! performs I/O.

pub mod beverage;
pub mod storage;
pub mod translation;
