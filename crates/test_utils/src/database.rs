//! Database test utilities
//!
//! Provides a testcontainers-managed MongoDB instance for integration tests.
//! Tests using it require a working Docker daemon and are expected to be
//! marked `#[ignore]` so the default test run stays self-contained.

use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

/// A wrapper around a MongoDB test container
pub struct TestMongo {
    container: ContainerAsync<Mongo>,
}

impl TestMongo {
    /// Starts a new MongoDB container
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start (typically: no Docker
    /// daemon available).
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Mongo::default().start().await?;
        Ok(Self { container })
    }

    /// Returns a connection URI for the running instance
    pub async fn connection_uri(
        &self,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(27017).await?;
        Ok(format!("mongodb://{host}:{port}/"))
    }
}
