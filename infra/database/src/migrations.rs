use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashMap;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::debug;

/// Ordered migrations contributed by one feature slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceMigrations {
    pub slice_key: &'static str,
    pub slice_name: &'static str,
    pub migrations: &'static [Migration],
}

/// A single SQL migration. The checksum is derived from the script at
/// runtime, so editing an already-applied script is always detected.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: &'static str,
    pub script: &'static str,
}

impl Migration {
    #[must_use]
    pub const fn new(version: &'static str, script: &'static str) -> Self {
        Self { version, script }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub slice_key: String,
    pub version: String,
    pub checksum: String,
}

#[derive(Debug, Default)]
pub struct MigrationReport {
    pub applied: Vec<AppliedMigration>,
    pub skipped: Vec<AppliedMigration>,
}

/// Applies slice migrations in registration order, tracking them in the
/// `_migrations` table keyed by `(slice_key, version)`.
#[derive(Debug)]
pub(crate) struct MigrationRunner {
    pool: PgPool,
    slices: Vec<SliceMigrations>,
}

impl MigrationRunner {
    #[must_use]
    pub(crate) const fn new(pool: PgPool, slices: Vec<SliceMigrations>) -> Self {
        Self { pool, slices }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        self.ensure_tracking_table().await?;

        let mut report = MigrationReport::default();
        let applied_migrations = self.get_migrations_map().await?;

        for slice in &self.slices {
            for migration in slice.migrations {
                let checksum = script_checksum(migration.script);
                let entry = AppliedMigration {
                    slice_key: slice.slice_key.to_owned(),
                    version: migration.version.to_owned(),
                    checksum,
                };

                if let Some(applied) =
                    applied_migrations.get(&format!("{}:{}", slice.slice_key, migration.version))
                {
                    ensure_checksum_match(&entry, &applied.checksum)?;
                    report.skipped.push(entry);
                    continue;
                }

                self.apply_migration(slice, migration, &entry.checksum).await?;
                report.applied.push(entry);
            }
        }

        Ok(report)
    }

    async fn ensure_tracking_table(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                slice_key  text NOT NULL,
                version    text NOT NULL,
                checksum   text NOT NULL,
                applied_at timestamptz NOT NULL DEFAULT now(),
                PRIMARY KEY (slice_key, version)
            )",
        )
        .execute(&self.pool)
        .await
        .context("Creating migration tracking table")?;

        Ok(())
    }

    async fn apply_migration(
        &self,
        slice: &SliceMigrations,
        migration: &Migration,
        checksum: &str,
    ) -> Result<(), DatabaseError> {
        debug!(slice = slice.slice_key, version = migration.version, "Applying migration");

        let mut tx = self.pool.begin().await.context("Opening migration transaction")?;

        sqlx::raw_sql(migration.script).execute(&mut *tx).await.map_err(|e| {
            DatabaseError::Migration {
                message: format!(
                    "SQL execution failed at {}:{}: {e}",
                    slice.slice_key, migration.version
                )
                .into(),
                context: Some(slice.slice_name.into()),
            }
        })?;

        sqlx::query(
            "INSERT INTO _migrations (slice_key, version, checksum) VALUES ($1, $2, $3)",
        )
        .bind(slice.slice_key)
        .bind(migration.version)
        .bind(checksum)
        .execute(&mut *tx)
        .await
        .context("Recording applied migration")?;

        tx.commit().await.context("Committing migration transaction")?;

        Ok(())
    }

    async fn get_migrations_map(
        &self,
    ) -> Result<FxHashMap<String, AppliedMigration>, DatabaseError> {
        let entries: Vec<(String, String, String)> =
            sqlx::query_as("SELECT slice_key, version, checksum FROM _migrations")
                .fetch_all(&self.pool)
                .await
                .context("Loading applied migrations")?;

        Ok(entries
            .into_iter()
            .map(|(slice_key, version, checksum)| {
                (
                    format!("{slice_key}:{version}"),
                    AppliedMigration { slice_key, version, checksum },
                )
            })
            .collect())
    }
}

/// Hex-encoded SHA-256 of the migration script.
#[must_use]
pub fn script_checksum(script: &str) -> String {
    hex::encode(Sha256::digest(script.as_bytes()))
}

fn ensure_checksum_match(
    migration: &AppliedMigration,
    existing: &str,
) -> Result<(), DatabaseError> {
    if existing != migration.checksum {
        return Err(DatabaseError::Migration {
            message: format!(
                "Checksum mismatch for {}:{} (expected {}, got {})",
                migration.slice_key, migration.version, existing, migration.checksum
            )
            .into(),
            context: Some("Migration already applied with different checksum".into()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_stable_and_content_addressed() {
        let a = script_checksum("CREATE TABLE t (id uuid PRIMARY KEY)");
        let b = script_checksum("CREATE TABLE t (id uuid PRIMARY KEY)");
        let c = script_checksum("CREATE TABLE other (id uuid PRIMARY KEY)");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64, "sha-256 hex digest");
    }

    #[test]
    fn checksum_mismatch_is_an_error() {
        let entry = AppliedMigration {
            slice_key: "users".to_owned(),
            version: "0001".to_owned(),
            checksum: script_checksum("CREATE TABLE users ()"),
        };

        assert!(ensure_checksum_match(&entry, &entry.checksum.clone()).is_ok());

        let err = ensure_checksum_match(&entry, "deadbeef").expect_err("mismatch");
        assert!(matches!(err, DatabaseError::Migration { .. }));
        assert!(err.to_string().contains("users:0001"));
    }
}
