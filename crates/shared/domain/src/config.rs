use crate::constants::{
    DEFAULT_AUTO_LOGIN_EMAIL, DEFAULT_AUTO_LOGIN_PASSWORD, DEFAULT_UPLOAD_PREFIX,
    DEV_AUTO_LOGIN_EMAIL, FALLBACK_SECRET,
};
use crate::features::FeatureSet;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub environment: RuntimeEnv,
    pub secret: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
    pub editor: EditorConfig,
    pub i18n: I18nConfig,
    pub graphql: GraphQlConfig,
    pub typegen: TypegenConfig,
    pub features: FeatureSet,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl ApiConfig {
    /// Resolves the admin auto-login identity for the configured environment.
    #[must_use]
    pub fn auto_login(&self) -> AutoLogin {
        AutoLogin::resolve(&self.environment, self.admin.admin_password.as_deref())
    }
}

/// Deployment environment, sourced from `NODE_ENV`.
///
/// Anything that is not literally `development` or `production` is preserved
/// as [`RuntimeEnv::Other`] and treated like production.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RuntimeEnv {
    Development,
    Production,
    Other(String),
}

impl RuntimeEnv {
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }
}

impl Default for RuntimeEnv {
    fn default() -> Self {
        Self::Production
    }
}

impl From<String> for RuntimeEnv {
    fn from(value: String) -> Self {
        match value.as_str() {
            "development" => Self::Development,
            "production" => Self::Production,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RuntimeEnv {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// `PostgreSQL` connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    /// Implicit schema push stays off; the schema only changes through
    /// explicit, checksummed migrations.
    pub push: bool,
}

/// Object storage (S3) configuration for the `media` collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Public hostname used when generating media URLs.
    pub public_hostname: Option<String>,
    /// Key prefix for uploads; `None` falls back to `"media"`.
    pub upload_prefix: Option<String>,
    pub bucket: String,
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible stores (e.g. MinIO).
    pub endpoint: Option<String>,
    pub disable_local_storage: bool,
}

impl StorageConfig {
    /// Effective upload key prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.upload_prefix.as_deref().unwrap_or(DEFAULT_UPLOAD_PREFIX)
    }
}

/// Admin panel configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Development auto-login password, sourced from `ADMIN_PASSWORD`.
    pub admin_password: Option<String>,
}

/// Credentials pre-filled in the admin UI login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoLogin {
    pub email: String,
    pub password: Option<String>,
    pub prefill_only: bool,
}

impl AutoLogin {
    /// Environment-dependent auto-login identity:
    /// development uses the admin identity with the operator-supplied
    /// password, every other environment uses a throwaway login.
    #[must_use]
    pub fn resolve(environment: &RuntimeEnv, admin_password: Option<&str>) -> Self {
        if environment.is_development() && !environment.is_production() {
            Self {
                email: DEV_AUTO_LOGIN_EMAIL.to_owned(),
                password: admin_password.map(str::to_owned),
                prefill_only: true,
            }
        } else {
            Self {
                email: DEFAULT_AUTO_LOGIN_EMAIL.to_owned(),
                password: Some(DEFAULT_AUTO_LOGIN_PASSWORD.to_owned()),
                prefill_only: true,
            }
        }
    }
}

/// Rich-text editor selection for `richText` fields.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub kind: EditorKind,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    #[default]
    Lexical,
}

/// Supported admin UI languages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub supported_languages: Vec<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }
}

/// GraphQL surface toggle. The platform ships REST-only; this stays disabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphQlConfig {
    pub disable: bool,
}

/// Generated collection type manifest output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypegenConfig {
    /// Output path, resolved relative to the config file directory when a
    /// config file was used.
    pub output_file: PathBuf,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/folio".to_owned(),
            max_connections: 8,
            acquire_timeout_seconds: 10,
            push: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_hostname: None,
            upload_prefix: None,
            bucket: "folio-media".to_owned(),
            region: None,
            endpoint: None,
            disable_local_storage: true,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { supported_languages: vec![Language::En] }
    }
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self { disable: true }
    }
}

impl Default for TypegenConfig {
    fn default() -> Self {
        Self { output_file: PathBuf::from("folio-types.json") }
    }
}

impl Default for ApiConfigInner {
    fn default() -> Self {
        Self {
            environment: RuntimeEnv::default(),
            secret: FALLBACK_SECRET.to_owned(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            storage: StorageConfig::default(),
            admin: AdminConfig::default(),
            editor: EditorConfig::default(),
            i18n: I18nConfig::default(),
            graphql: GraphQlConfig::default(),
            typegen: TypegenConfig::default(),
            features: FeatureSet::ALL,
        }
    }
}
