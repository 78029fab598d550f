//! One-time platform seeding.
//!
//! Runs once at startup: if no administrator exists, seed data is created
//! in a fixed order (global settings, then blog, then projects). The
//! outcome is an explicit value rather than a silent side effect, so the
//! caller decides whether a failed bootstrap is fatal.

use std::fmt;
use tracing::info;

/// The seed phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    GlobalSettings,
    Blog,
    Projects,
}

impl SeedStep {
    pub const ALL: [Self; 3] = [Self::GlobalSettings, Self::Blog, Self::Projects];

    #[must_use]
    pub const fn log_line(self) -> &'static str {
        match self {
            Self::GlobalSettings => "Creating global settings...",
            Self::Blog => "Creating blog...",
            Self::Projects => "Creating projects...",
        }
    }
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GlobalSettings => "global settings",
            Self::Blog => "blog",
            Self::Projects => "projects",
        };
        f.write_str(name)
    }
}

/// What the bootstrap pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Seed data was created.
    Seeded,
    /// An administrator already existed; nothing was touched.
    AlreadyInitialized,
}

type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Initialization check failed: {source}")]
    Check {
        #[source]
        source: SourceError,
    },
    #[error("Seeding {step} failed: {source}")]
    Seed {
        step: SeedStep,
        #[source]
        source: SourceError,
    },
}

impl BootstrapError {
    /// The step that failed, when the failure happened during seeding.
    #[must_use]
    pub const fn failed_step(&self) -> Option<SeedStep> {
        match self {
            Self::Check { .. } => None,
            Self::Seed { step, .. } => Some(*step),
        }
    }
}

/// Storage backend for the bootstrap pass.
///
/// The production implementation talks to Postgres; tests substitute a
/// recording double to verify ordering without a database.
pub trait Seeder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether seeding already happened (an administrator account exists).
    fn is_initialized(&mut self) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Executes one seed phase.
    fn seed(&mut self, step: SeedStep) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Runs the bootstrap pass.
///
/// Steps run in [`SeedStep::ALL`] order and the first failure
/// short-circuits the rest.
///
/// # Errors
/// Returns an error carrying the failing step when seeding fails, or a
/// check error when the admin lookup itself fails.
pub async fn initialize<S: Seeder>(seeder: &mut S) -> Result<InitOutcome, BootstrapError> {
    let initialized = seeder
        .is_initialized()
        .await
        .map_err(|e| BootstrapError::Check { source: Box::new(e) })?;

    if initialized {
        info!("Initialization already completed. Skipping setup.");
        return Ok(InitOutcome::AlreadyInitialized);
    }

    info!("Starting initialization process...");

    for step in SeedStep::ALL {
        info!("{}", step.log_line());
        seeder
            .seed(step)
            .await
            .map_err(|e| BootstrapError::Seed { step, source: Box::new(e) })?;
    }

    info!("Setup complete");
    Ok(InitOutcome::Seeded)
}

#[cfg(feature = "server")]
pub use platform::{PlatformSeedError, PlatformSeeder};

#[cfg(feature = "server")]
mod platform {
    use super::SeedStep;
    use sqlx::PgPool;

    #[derive(Debug, thiserror::Error)]
    pub enum PlatformSeedError {
        #[error(transparent)]
        Users(#[from] fhub_users::UsersError),
        #[error(transparent)]
        Globals(#[from] fhub_globals::GlobalsError),
        #[error(transparent)]
        Blog(#[from] fhub_blog::BlogError),
        #[error(transparent)]
        Projects(#[from] fhub_projects::ProjectsError),
    }

    /// Postgres-backed [`super::Seeder`].
    #[derive(Debug, Clone)]
    pub struct PlatformSeeder {
        pool: PgPool,
    }

    impl PlatformSeeder {
        #[must_use]
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    impl super::Seeder for PlatformSeeder {
        type Error = PlatformSeedError;

        async fn is_initialized(&mut self) -> Result<bool, Self::Error> {
            Ok(fhub_users::queries::admin_exists(&self.pool).await?)
        }

        async fn seed(&mut self, step: SeedStep) -> Result<(), Self::Error> {
            match step {
                SeedStep::GlobalSettings => fhub_globals::seed::seed_global(&self.pool).await?,
                SeedStep::Blog => fhub_blog::seed::seed_blog(&self.pool).await?,
                SeedStep::Projects => fhub_projects::seed::seed_projects(&self.pool).await?,
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("seed double failure")]
    struct DoubleError;

    #[derive(Default)]
    struct RecordingSeeder {
        initialized: bool,
        fail_at: Option<SeedStep>,
        seeded: Vec<SeedStep>,
    }

    impl Seeder for RecordingSeeder {
        type Error = DoubleError;

        async fn is_initialized(&mut self) -> Result<bool, Self::Error> {
            Ok(self.initialized)
        }

        async fn seed(&mut self, step: SeedStep) -> Result<(), Self::Error> {
            if self.fail_at == Some(step) {
                return Err(DoubleError);
            }
            self.seeded.push(step);
            Ok(())
        }
    }

    #[tokio::test]
    async fn seeds_in_fixed_order() {
        let mut seeder = RecordingSeeder::default();

        let outcome = initialize(&mut seeder).await.expect("bootstrap");

        assert_eq!(outcome, InitOutcome::Seeded);
        assert_eq!(seeder.seeded, [SeedStep::GlobalSettings, SeedStep::Blog, SeedStep::Projects]);
    }

    #[tokio::test]
    async fn skips_when_already_initialized() {
        let mut seeder = RecordingSeeder { initialized: true, ..Default::default() };

        let outcome = initialize(&mut seeder).await.expect("bootstrap");

        assert_eq!(outcome, InitOutcome::AlreadyInitialized);
        assert!(seeder.seeded.is_empty());
    }

    #[tokio::test]
    async fn short_circuits_on_first_failure() {
        let mut seeder =
            RecordingSeeder { fail_at: Some(SeedStep::Blog), ..Default::default() };

        let err = initialize(&mut seeder).await.expect_err("blog seed fails");

        assert_eq!(err.failed_step(), Some(SeedStep::Blog));
        assert_eq!(seeder.seeded, [SeedStep::GlobalSettings]);
    }

    #[test]
    fn log_lines_are_stable() {
        assert_eq!(SeedStep::GlobalSettings.log_line(), "Creating global settings...");
        assert_eq!(SeedStep::Blog.log_line(), "Creating blog...");
        assert_eq!(SeedStep::Projects.log_line(), "Creating projects...");
    }
}
