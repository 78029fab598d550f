//! # Database Infrastructure
//!
//! This crate provides a unified interface for initializing and managing
//! [PostgreSQL](https://www.postgresql.org) connection pools across the workspace.
//!
//! ## Key Features
//! - **Resilient Connectivity**: Built-in retry logic for health checks during engine startup.
//! - **Builder Pattern**: Fluent API for configuring the pool.
//! - **Checksummed Migrations**: Feature slices contribute SQL migrations, applied in
//!   registration order and tracked per `(slice, version)` — there is no implicit
//!   schema push.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fhub_database::{Database, DatabaseError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder()
//!         .url("postgres://localhost:5432/folio")
//!         .max_connections(8)
//!         .init()
//!         .await?;
//!
//!     let _ = sqlx::query("SELECT 1").execute(db.pool()).await;
//!
//!     Ok(())
//! }
//! ```

mod error;
mod migrations;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use migrations::{AppliedMigration, Migration, MigrationReport, SliceMigrations, script_checksum};

use migrations::MigrationRunner;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, trace, warn};

const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    pool: PgPool,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!("PostgreSQL pool handle dropped");
    }
}

/// `PostgreSQL` pool wrapper that provides thread-safety and contextual error handling.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Access the underlying `SQLx` connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}

impl Deref for Database {
    type Target = PgPool;

    fn deref(&self) -> &Self::Target {
        &self.inner.pool
    }
}

/// A fluent builder for configuring and establishing a `PostgreSQL` pool.
///
/// The connection URL is required; pool sizing falls back to conservative
/// defaults suitable for a single service instance.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct DatabaseBuilder {
    url: Option<String>,
    max_connections: u32,
    acquire_timeout: Duration,
    slices: Vec<SliceMigrations>,
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            slices: Vec::new(),
        }
    }
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the maximum pool size.
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets how long `acquire` may wait for a free connection.
    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Registers the migrations of one feature slice. Slices are applied in
    /// the order they are registered.
    pub fn migrations(mut self, slice: SliceMigrations) -> Self {
        self.slices.push(slice);
        self
    }

    /// Consumes the builder and attempts to establish the pool.
    ///
    /// # Process
    /// 1. **Validation**: Ensures the URL is provided.
    /// 2. **Pool Creation**: Connects via [`PgPoolOptions`].
    /// 3. **Resilience**: Performs up to 3 health checks using `SELECT 1`. If the first
    ///    check fails, it retries with exponential backoff (starting at 500ms).
    /// 4. **Migrations**: Applies all registered slice migrations.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if required parameters are missing.
    /// * [`DatabaseError::Connection`] if the database remains unhealthy after retries.
    /// * [`DatabaseError::Migration`] if a migration fails or a checksum mismatches.
    #[instrument(skip(self), fields(max_connections = self.max_connections))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&url)
            .await
            .map_err(|e| DatabaseError::Connection {
                message: e.to_string().into(),
                context: Some("Creating connection pool".into()),
            })?;

        // 1. Connectivity & Health Check with Retries
        let mut delay = Duration::from_millis(500);
        for attempt in 1..=3 {
            if sqlx::query("SELECT 1").execute(&pool).await.is_ok() {
                break;
            }
            if attempt == 3 {
                return Err(DatabaseError::Connection {
                    message: "Unhealthy after retries".into(),
                    context: None,
                });
            }
            warn!(attempt, ?delay, "Database not ready, retrying...");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }

        let version: Option<String> = sqlx::query_scalar("SHOW server_version")
            .fetch_optional(&pool)
            .await
            .unwrap_or_default();
        info!(version = version.as_deref().unwrap_or("unknown"), "PostgreSQL connection established");

        // 2. Migrations
        info!("Applying database migrations...");
        let migration_report = MigrationRunner::new(pool.clone(), self.slices).run().await?;
        for skipped in migration_report.skipped {
            trace!(slice = skipped.slice_key, version = skipped.version, "Skipping migration");
        }
        for applied in migration_report.applied {
            info!(slice = applied.slice_key, version = applied.version, "Applied migration");
        }
        info!("Database migrations applied successfully");

        Ok(Database { inner: Arc::new(DatabaseInner { pool }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_requires_url() {
        let err = Database::builder().init().await.expect_err("missing URL");
        assert!(matches!(err, DatabaseError::Validation { .. }));
    }

    #[test]
    fn builder_defaults() {
        let builder = DatabaseBuilder::new();
        assert_eq!(builder.max_connections, 8);
        assert_eq!(builder.acquire_timeout, Duration::from_secs(10));
        assert!(builder.slices.is_empty());
    }
}
