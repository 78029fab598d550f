use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },
}

impl From<config::ConfigError> for ConfigError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Adds contextual information to `Result`s carrying a [`ConfigError`].
pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ConfigError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Environment variables with fixed, historical names that are applied as
/// explicit overrides on top of the layered sources. Their names predate the
/// `FHUB__` convention and are kept for deployment compatibility.
const WELL_KNOWN_ENV: &[(&str, &str)] = &[
    ("NODE_ENV", "environment"),
    ("PAYLOAD_SECRET", "secret"),
    ("ADMIN_PASSWORD", "admin.admin_password"),
    ("DATABASE_URL", "database.url"),
    ("NEXT_PUBLIC_S3_HOSTNAME", "storage.public_hostname"),
    ("NEXT_PUBLIC_UPLOAD_PREFIX", "storage.upload_prefix"),
];

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). A file passed
///    explicitly is required; with `None`, the default `server` file is optional so
///    an env-only deployment still boots.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed
///    with `FHUB__`. Nested structures are accessed using double underscores
///    (e.g., `FHUB__DATABASE__URL` maps to `database.url`).
/// 3. **Well-known Variables**: Applies the fixed-name deployment variables
///    (`NODE_ENV`, `PAYLOAD_SECRET`, `ADMIN_PASSWORD`, `DATABASE_URL`,
///    `NEXT_PUBLIC_S3_HOSTNAME`, `NEXT_PUBLIC_UPLOAD_PREFIX`) last, so they win.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * The merged content does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_from(path, std::env::vars())
}

/// Same as [`load_config`], but with the well-known variables taken from the
/// given pairs instead of the process environment. The `FHUB__` prefix layer
/// still reads the process environment.
pub fn load_config_from<T>(
    path: Option<impl AsRef<Path>>,
    env: impl IntoIterator<Item = (String, String)>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from("server"), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let mut builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix("FHUB")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., FHUB__DATABASE__URL)
        );

    builder = apply_well_known_env(builder, env)?;

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

fn apply_well_known_env(
    mut builder: ConfigBuilder<DefaultState>,
    env: impl IntoIterator<Item = (String, String)>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, value) in env {
        if let Some((_, key)) = WELL_KNOWN_ENV.iter().find(|(name, _)| *name == var) {
            builder = builder
                .set_override(*key, value)
                .context("Failed to apply well-known environment override")?;
        }
    }
    Ok(builder)
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::config::{ApiConfig, RuntimeEnv};
    use std::io::Write;

    fn pairs(vars: &[(&str, &str)]) -> Vec<(String, String)> {
        vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn env_only_load_uses_defaults() {
        let cfg: ApiConfig = load_config_from(None::<&str>, pairs(&[])).expect("env-only load");
        assert_eq!(cfg.environment, RuntimeEnv::Production);
        assert_eq!(cfg.secret, "set-a-secret-in-your-env");
        assert!(cfg.graphql.disable);
    }

    #[test]
    fn well_known_variables_override_file_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path).expect("config file");
        writeln!(file, "secret = \"from-file\"").expect("write config");

        let cfg: ApiConfig = load_config_from(
            Some(&path),
            pairs(&[
                ("NODE_ENV", "development"),
                ("PAYLOAD_SECRET", "from-env"),
                ("NEXT_PUBLIC_S3_HOSTNAME", "cdn.example.com"),
                ("NEXT_PUBLIC_UPLOAD_PREFIX", "assets"),
                ("HOME", "/ignored"),
            ]),
        )
        .expect("load with overrides");

        assert_eq!(cfg.environment, RuntimeEnv::Development);
        assert_eq!(cfg.secret, "from-env");
        assert_eq!(cfg.storage.public_hostname.as_deref(), Some("cdn.example.com"));
        assert_eq!(cfg.storage.prefix(), "assets");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result: Result<ApiConfig, _> =
            load_config_from(Some("definitely-missing.toml"), pairs(&[]));
        assert!(matches!(result, Err(ConfigError::Config { .. })));
    }
}
