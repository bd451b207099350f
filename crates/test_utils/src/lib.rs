//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the medical bill store test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canonical test values for patients, bills, and line items
//! - `builders`: Builder pattern for constructing bill documents
//! - `database`: MongoDB testcontainer management for integration tests

pub mod builders;
pub mod database;
pub mod fixtures;

pub use builders::*;
pub use database::*;
pub use fixtures::*;
