use crate::error::{GlobalsError, GlobalsErrorExt};
use fhub_domain::constants::DEV_AUTO_LOGIN_EMAIL;
use sqlx::PgPool;
use tracing::debug;

const SEED_SITE_TITLE: &str = "Folio";
const SEED_SITE_DESCRIPTION: &str = "Portfolio and blog";

/// Seeds the administrator account and the site settings singleton.
///
/// All inserts are conflict-tolerant so a partially seeded database can
/// be seeded again without errors.
///
/// # Errors
/// Returns an error if any insert fails.
pub async fn seed_global(pool: &PgPool) -> Result<(), GlobalsError> {
    sqlx::query(
        "INSERT INTO users (email, name, role) VALUES ($1, $2, 'admin')
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(DEV_AUTO_LOGIN_EMAIL)
    .bind("Admin")
    .execute(pool)
    .await
    .context("Failed to seed admin user")?;

    sqlx::query(
        "INSERT INTO site_settings (site_title, site_description) VALUES ($1, $2)
         ON CONFLICT (singleton) DO NOTHING",
    )
    .bind(SEED_SITE_TITLE)
    .bind(SEED_SITE_DESCRIPTION)
    .execute(pool)
    .await
    .context("Failed to seed site settings")?;

    debug!("Global settings seeded");
    Ok(())
}
