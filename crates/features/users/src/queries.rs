use crate::collections::ADMIN_ROLE;
use crate::error::{UsersError, UsersErrorExt};
use sqlx::PgPool;

/// Checks whether at least one administrator account exists.
///
/// # Errors
/// Returns an error if the query fails.
pub async fn admin_exists(pool: &PgPool) -> Result<bool, UsersError> {
    let row: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM users WHERE role = $1 LIMIT 1")
            .bind(ADMIN_ROLE)
            .fetch_optional(pool)
            .await
            .context("Failed to query for admin users")?;

    Ok(row.is_some())
}
