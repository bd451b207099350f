//! Bill Store - MongoDB data-access layer for medical bill documents
//!
//! This crate is a thin adapter between caller code and the MongoDB driver.
//! It owns one client/collection handle, bootstraps the lookup indexes, and
//! exposes typed read/write operations over bill documents: insert, fetch by
//! id/MRN/name, per-category summaries, patient spending aggregation, keyword
//! search over line-item descriptions, and collection-wide statistics.
//!
//! The store is append-and-read: no update or delete operations are exposed.
//! All operations delegate directly to the driver; there is no retry, caching,
//! or locking layer on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use bill_store::{BillStore, StoreConfig};
//!
//! let store = BillStore::connect(StoreConfig::from_env()?).await?;
//! let bill = store.get_bill_by_id("665f1c0a9d3e4b6f8a2d1c35").await?;
//! store.shutdown().await;
//! ```

pub mod config;
pub mod error;
pub mod pattern;
pub mod pipeline;
pub mod store;
pub mod views;

pub use config::StoreConfig;
pub use error::StoreError;
pub use pattern::MatchMode;
pub use store::BillStore;
pub use views::{CategorySummary, CollectionStatistics, PatientSpending};
