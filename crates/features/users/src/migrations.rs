use fhub_database::{Migration, SliceMigrations};

const CREATE_USERS: &str = r"
CREATE EXTENSION IF NOT EXISTS pgcrypto;

CREATE TABLE IF NOT EXISTS users (
    id          uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    email       text NOT NULL UNIQUE,
    name        text,
    role        text NOT NULL DEFAULT 'editor',
    created_at  timestamptz NOT NULL DEFAULT now(),
    updated_at  timestamptz NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS users_role_idx ON users (role);
";

const MIGRATIONS: &[Migration] = &[Migration::new("0001_create_users", CREATE_USERS)];

/// Schema migrations owned by the users slice.
#[must_use]
pub fn migrations() -> SliceMigrations {
    SliceMigrations { slice_key: "users", slice_name: "Users", migrations: MIGRATIONS }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_order() {
        let slice = migrations();
        assert_eq!(slice.slice_key, "users");
        assert!(!slice.migrations.is_empty());
        let versions: Vec<_> = slice.migrations.iter().map(|m| m.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        assert_eq!(versions, sorted);
    }
}
