use fhub_database::{Migration, SliceMigrations};

const CREATE_PROJECTS: &str = r"
CREATE TABLE IF NOT EXISTS projects (
    id           uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    title        text NOT NULL,
    slug         text NOT NULL UNIQUE,
    description  jsonb,
    url          text,
    image_id     uuid REFERENCES media (id) ON DELETE SET NULL,
    featured     boolean NOT NULL DEFAULT FALSE,
    created_at   timestamptz NOT NULL DEFAULT now(),
    updated_at   timestamptz NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS projects_featured_idx ON projects (featured) WHERE featured;
";

const MIGRATIONS: &[Migration] = &[Migration::new("0001_create_projects", CREATE_PROJECTS)];

/// Schema migrations owned by the projects slice.
#[must_use]
pub fn migrations() -> SliceMigrations {
    SliceMigrations { slice_key: "projects", slice_name: "Projects", migrations: MIGRATIONS }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_order() {
        let slice = migrations();
        assert_eq!(slice.slice_key, "projects");
        assert!(!slice.migrations.is_empty());
    }
}
