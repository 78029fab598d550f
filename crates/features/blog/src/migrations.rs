use fhub_database::{Migration, SliceMigrations};

const CREATE_POSTS: &str = r"
CREATE TABLE IF NOT EXISTS posts (
    id            uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    title         text NOT NULL,
    slug          text NOT NULL UNIQUE,
    content       jsonb,
    excerpt       text,
    cover_id      uuid REFERENCES media (id) ON DELETE SET NULL,
    published_at  timestamptz,
    created_at    timestamptz NOT NULL DEFAULT now(),
    updated_at    timestamptz NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS posts_published_at_idx ON posts (published_at DESC);
";

const MIGRATIONS: &[Migration] = &[Migration::new("0001_create_posts", CREATE_POSTS)];

/// Schema migrations owned by the blog slice.
#[must_use]
pub fn migrations() -> SliceMigrations {
    SliceMigrations { slice_key: "blog", slice_name: "Blog", migrations: MIGRATIONS }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_order() {
        let slice = migrations();
        assert_eq!(slice.slice_key, "blog");
        assert!(!slice.migrations.is_empty());
    }
}
