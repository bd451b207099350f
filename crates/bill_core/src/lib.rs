//! Bill Core - Foundational types for the medical bill store
//!
//! This crate provides the domain vocabulary shared by the storage layer:
//! - The closed set of billing line-item categories
//! - The typed shape of a persisted bill document
//! - Common error types

pub mod category;
pub mod document;
pub mod error;

pub use category::BillCategory;
pub use document::{BillDocument, BillHeaders, LineItem};
pub use error::CoreError;
