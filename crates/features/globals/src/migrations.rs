use fhub_database::{Migration, SliceMigrations};

const CREATE_MEDIA: &str = r"
CREATE TABLE IF NOT EXISTS media (
    id          uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    filename    text NOT NULL UNIQUE,
    alt         text NOT NULL DEFAULT '',
    mime_type   text,
    filesize    bigint,
    url         text,
    created_at  timestamptz NOT NULL DEFAULT now(),
    updated_at  timestamptz NOT NULL DEFAULT now()
);
";

const CREATE_SITE_SETTINGS: &str = r"
CREATE TABLE IF NOT EXISTS site_settings (
    -- singleton: the CHECK pins the table to one row
    singleton        boolean PRIMARY KEY DEFAULT TRUE CHECK (singleton),
    site_title       text NOT NULL,
    site_description text,
    logo_id          uuid REFERENCES media (id) ON DELETE SET NULL,
    created_at       timestamptz NOT NULL DEFAULT now(),
    updated_at       timestamptz NOT NULL DEFAULT now()
);
";

const MIGRATIONS: &[Migration] = &[
    Migration::new("0001_create_media", CREATE_MEDIA),
    Migration::new("0002_create_site_settings", CREATE_SITE_SETTINGS),
];

/// Schema migrations owned by the globals slice.
#[must_use]
pub fn migrations() -> SliceMigrations {
    SliceMigrations { slice_key: "globals", slice_name: "Globals", migrations: MIGRATIONS }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_order() {
        let slice = migrations();
        assert_eq!(slice.slice_key, "globals");
        let versions: Vec<_> = slice.migrations.iter().map(|m| m.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        assert_eq!(versions, sorted);
    }
}
