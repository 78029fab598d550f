use crate::error::{BlogError, BlogErrorExt};
use sqlx::PgPool;
use tracing::debug;

struct SeedPost {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
}

// Content is stored as editor state, one paragraph per post is enough
// for a fresh install.
const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Hello, world",
        slug: "hello-world",
        excerpt: "The first post on this site.",
        content: r#"{"root":{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","text":"Welcome to the blog."}]}]}}"#,
    },
    SeedPost {
        title: "About this site",
        slug: "about-this-site",
        excerpt: "What you will find here.",
        content: r#"{"root":{"type":"root","children":[{"type":"paragraph","children":[{"type":"text","text":"Posts about projects and work in progress."}]}]}}"#,
    },
];

/// Seeds the initial blog posts.
///
/// Inserts are conflict-tolerant on the post slug so re-running after a
/// partial seed is safe.
///
/// # Errors
/// Returns an error if any insert fails.
pub async fn seed_blog(pool: &PgPool) -> Result<(), BlogError> {
    for post in SEED_POSTS {
        sqlx::query(
            "INSERT INTO posts (title, slug, excerpt, content, published_at)
             VALUES ($1, $2, $3, $4::jsonb, now())
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(post.title)
        .bind(post.slug)
        .bind(post.excerpt)
        .bind(post.content)
        .execute(pool)
        .await
        .context("Failed to seed blog post")?;
    }

    debug!(count = SEED_POSTS.len(), "Blog posts seeded");
    Ok(())
}
