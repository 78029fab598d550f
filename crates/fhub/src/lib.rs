//! Facade crate for `FolioHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `fhub` with the `server` feature flag.
//! - Call [`init`] to register feature slices and [`build_registry`] to
//!   assemble the collection schema; extend both as new slices appear.

pub mod bootstrap;

pub use fhub_domain as domain;
use fhub_domain::config::ApiConfig;
use fhub_domain::features::FeatureSet;
use fhub_domain::registry::{CollectionRegistry, DuplicateSlug};
pub use fhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use fhub_kernel::server::router::{schema_router, system_router};
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use fhub_blog as blog;
    pub use fhub_globals as globals;
    pub use fhub_projects as projects;
    pub use fhub_users as users;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "server")]
        "users",
        #[cfg(feature = "server")]
        "globals",
        #[cfg(feature = "server")]
        "blog",
        #[cfg(feature = "server")]
        "projects",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Assembles the collection registry from all enabled slices.
///
/// Globals registers first so the media library exists before anything
/// that references it; the rest follows the historical order.
///
/// # Errors
/// Returns an error if two slices claim the same slug.
pub fn build_registry(features: FeatureSet) -> Result<CollectionRegistry, DuplicateSlug> {
    let mut registry = CollectionRegistry::default();

    registry.register_all(fhub_globals::collections::collections())?;
    for global in fhub_globals::collections::globals() {
        registry.register_global(global)?;
    }

    registry.register_all(fhub_users::collections::collections())?;

    if features.contains(FeatureSet::PORTFOLIO) {
        registry.register_all(fhub_projects::collections::collections())?;
    }
    if features.contains(FeatureSet::BLOG) {
        registry.register_all(fhub_blog::collections::collections())?;
    }

    Ok(registry)
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Globals (media + site settings)
    slices.push(fhub_globals::init()?);

    // Users
    slices.push(fhub_users::init()?);

    // Portfolio
    if config.features.contains(FeatureSet::PORTFOLIO) {
        slices.push(fhub_projects::init()?);
    }

    // Blog
    if config.features.contains(FeatureSet::BLOG) {
        slices.push(fhub_blog::init()?);
    }

    Ok(slices)
}

/// Migrations for all enabled slices.
///
/// Schema order differs from registration order: users must exist before
/// globals because the globals seed inserts the initial admin row.
#[cfg(feature = "server")]
#[must_use]
pub fn migrations(features: FeatureSet) -> Vec<fhub_database::SliceMigrations> {
    let mut slices =
        vec![fhub_users::migrations::migrations(), fhub_globals::migrations::migrations()];

    if features.contains(FeatureSet::PORTFOLIO) {
        slices.push(fhub_projects::migrations::migrations());
    }
    if features.contains(FeatureSet::BLOG) {
        slices.push(fhub_blog::migrations::migrations());
    }

    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::constants::{MEDIA, POSTS, PROJECTS, SITE_SETTINGS, USERS};

    #[test]
    fn full_registry_contains_all_slices() {
        let registry = build_registry(FeatureSet::ALL).expect("registry");

        let slugs: Vec<_> = registry.collections().iter().map(|c| c.slug.as_ref()).collect();
        assert_eq!(slugs, [MEDIA, USERS, PROJECTS, POSTS]);
        assert_eq!(registry.globals()[0].slug, SITE_SETTINGS);
    }

    #[test]
    fn feature_flags_trim_the_registry() {
        let registry = build_registry(FeatureSet::BLOG).expect("registry");

        let slugs: Vec<_> = registry.collections().iter().map(|c| c.slug.as_ref()).collect();
        assert!(slugs.contains(&POSTS));
        assert!(!slugs.contains(&PROJECTS));
        // core collections are not feature-gated
        assert!(slugs.contains(&USERS));
        assert!(slugs.contains(&MEDIA));
    }

    #[cfg(feature = "server")]
    #[test]
    fn migration_schedule_puts_users_before_globals() {
        let keys: Vec<_> = migrations(FeatureSet::ALL).iter().map(|s| s.slice_key).collect();
        assert_eq!(keys, ["users", "globals", "projects", "blog"]);
    }
}
