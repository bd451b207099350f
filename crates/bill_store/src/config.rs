//! Store configuration
//!
//! Loaded from the environment (a `.env` file is honored when present):
//! `CONNECTION_URI` is required, `DATABASE_NAME` and `COLLECTION_NAME` fall
//! back to well-known defaults.

use serde::Deserialize;

use crate::error::StoreError;

/// Default database name when `DATABASE_NAME` is not set
pub const DEFAULT_DATABASE_NAME: &str = "medical_bills";

/// Default collection name when `COLLECTION_NAME` is not set
pub const DEFAULT_COLLECTION_NAME: &str = "bills";

/// Configuration for the bill store connection
///
/// # Example
///
/// ```rust
/// use bill_store::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .database_name("medical_bills_staging");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub connection_uri: String,
    /// Database holding the bill collection
    #[serde(default = "default_database_name")]
    pub database_name: String,
    /// Collection holding the bill documents
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
}

fn default_database_name() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

fn default_collection_name() -> String {
    DEFAULT_COLLECTION_NAME.to_string()
}

impl StoreConfig {
    /// Creates a configuration with the given connection string and default
    /// database/collection names
    pub fn new(connection_uri: impl Into<String>) -> Self {
        Self {
            connection_uri: connection_uri.into(),
            database_name: default_database_name(),
            collection_name: default_collection_name(),
        }
    }

    /// Sets the database name
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Sets the collection name
    pub fn collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Loads configuration from the environment
    ///
    /// Recognized variables: `CONNECTION_URI` (required), `DATABASE_NAME`,
    /// `COLLECTION_NAME`. A missing connection string is a fatal
    /// [`StoreError::Configuration`]; there is nothing to retry.
    pub fn from_env() -> Result<Self, StoreError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| StoreError::Configuration(e.to_string()))
    }
}
