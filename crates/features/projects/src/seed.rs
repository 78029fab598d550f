use crate::error::{ProjectsError, ProjectsErrorExt};
use sqlx::PgPool;
use tracing::debug;

struct SeedProject {
    title: &'static str,
    slug: &'static str,
    url: &'static str,
    featured: bool,
}

const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Portfolio site",
        slug: "portfolio-site",
        url: "https://example.com",
        featured: true,
    },
    SeedProject {
        title: "Side project",
        slug: "side-project",
        url: "https://example.com/side",
        featured: false,
    },
];

/// Seeds the initial project entries.
///
/// Inserts are conflict-tolerant on the project slug so re-running after
/// a partial seed is safe.
///
/// # Errors
/// Returns an error if any insert fails.
pub async fn seed_projects(pool: &PgPool) -> Result<(), ProjectsError> {
    for project in SEED_PROJECTS {
        sqlx::query(
            "INSERT INTO projects (title, slug, url, featured)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(project.title)
        .bind(project.slug)
        .bind(project.url)
        .bind(project.featured)
        .execute(pool)
        .await
        .context("Failed to seed project")?;
    }

    debug!(count = SEED_PROJECTS.len(), "Projects seeded");
    Ok(())
}
