//! Pooled MongoDB client shared across request handlers.
//!
//! The driver's connection pool is the single shared mutable resource in
//! the process. Each request checks a connection out for the duration of
//! its one operation and returns it implicitly on completion, so no
//! application-level synchronization is needed on top.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::models::v1::{question, response};

/// Connection-lifecycle errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The connection string is absent or malformed. Fatal at startup.
    #[error("database connection is misconfigured: {0}")]
    Config(String),

    /// The pool handle was used after shutdown. A programming error;
    /// production wiring never hits this.
    #[error("database pool is not initialized")]
    NotInitialized,

    /// The store did not answer within the configured server-selection
    /// timeout. Transient; surfaced without retry.
    #[error("database unavailable: {0}")]
    Unavailable(String),

    /// A query or insert failed.
    #[error("database operation failed: {0}")]
    QueryFailed(#[from] mongodb::error::Error),
}

/// The pooled client plus the database-namespace handle handlers borrow.
///
/// Cloning is cheap: clones share the same underlying pool. The pool is
/// owned exclusively by this type; handlers never close or reconfigure it
/// mid-request.
#[derive(Clone)]
pub struct DatabasePool {
    client: Client,
    database: Database,
    closed: Arc<AtomicBool>,
}

impl DatabasePool {
    /// Builds the pooled client from the configured connection string and
    /// pool options. Called exactly once per process lifetime, before any
    /// handler runs; the sockets themselves are established lazily by the
    /// driver.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.url.is_empty() {
            return Err(DatabaseError::Config(
                "connection string is not set (database.url / MONGODB_URL)".to_string(),
            ));
        }

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| DatabaseError::Config(e.to_string()))?;

        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.max_idle_time = Some(Duration::from_millis(config.max_idle_time_ms));
        options.connect_timeout = Some(Duration::from_millis(config.connect_timeout_ms));
        options.server_selection_timeout = Some(Duration::from_millis(config.server_selection_timeout_ms));
        options.retry_writes = Some(config.retry_writes);

        let client = Client::with_options(options).map_err(|e| DatabaseError::Config(e.to_string()))?;
        let database = client.database(&config.database);

        ::tracing::info!(
            database = %config.database,
            max_pool_size = config.max_pool_size,
            min_pool_size = config.min_pool_size,
            "database pool initialized"
        );

        Ok(Self {
            client,
            database,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The shared database-namespace handle. Safe to call concurrently from
    /// many in-flight requests; the driver pool manages connection checkout.
    pub fn handle(&self) -> Result<&Database, DatabaseError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(DatabaseError::NotInitialized);
        }

        Ok(&self.database)
    }

    /// The questions collection, typed against the question document.
    pub fn questions(&self) -> Result<Collection<question::Question>, DatabaseError> {
        Ok(self.handle()?.collection(question::COLLECTION))
    }

    /// The responses collection, typed against the response document.
    pub fn responses(&self) -> Result<Collection<response::SurveyResponse>, DatabaseError> {
        Ok(self.handle()?.collection(response::COLLECTION))
    }

    /// Lightweight health probe: one `{ping: 1}` round trip, bounded by the
    /// configured server-selection timeout.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.handle()?
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DatabaseError::Unavailable(e.to_string()))?;

        Ok(())
    }

    /// Closes the pool, releasing all sockets. Idempotent: the second and
    /// later calls are no-ops.
    pub async fn shutdown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        ::tracing::info!("database pool shutting down");
        self.client.clone().shutdown().await;
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("database", &self.database.name())
            .field("closed", &self.closed.load(Ordering::SeqCst))
            .finish()
    }
}
