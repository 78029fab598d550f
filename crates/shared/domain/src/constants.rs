//! Shared string constants: collection slugs, feature names, API tags.

/// Collection slug for platform users.
pub const USERS: &str = "users";
/// Collection slug for uploaded media assets.
pub const MEDIA: &str = "media";
/// Collection slug for blog posts.
pub const POSTS: &str = "posts";
/// Collection slug for portfolio projects.
pub const PROJECTS: &str = "projects";
/// Global slug for the singleton site settings record.
pub const SITE_SETTINGS: &str = "site-settings";

/// Optional content feature names (see [`crate::features::FeatureSet`]).
pub const BLOG: &str = "blog";
pub const PORTFOLIO: &str = "portfolio";

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for content metadata endpoints.
pub const CONTENT_TAG: &str = "Content";

/// Upload key prefix applied when no explicit prefix is configured.
pub const DEFAULT_UPLOAD_PREFIX: &str = "media";

/// Placeholder secret used when `PAYLOAD_SECRET` is not provided.
pub const FALLBACK_SECRET: &str = "set-a-secret-in-your-env";

/// Admin UI auto-login identity in development environments.
pub const DEV_AUTO_LOGIN_EMAIL: &str = "admin@withpayload.com";
/// Admin UI auto-login identity outside development.
pub const DEFAULT_AUTO_LOGIN_EMAIL: &str = "user@withpayload.com";
/// Auto-login password outside development.
pub const DEFAULT_AUTO_LOGIN_PASSWORD: &str = "test";
