use fhub_domain::config::{
    ApiConfig, AutoLogin, DatabaseConfig, GraphQlConfig, Language, RuntimeEnv, ServerConfig,
    StorageConfig,
};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert!(db.url.starts_with("postgres://"));
    assert!(!db.push);

    let storage = StorageConfig::default();
    assert_eq!(storage.prefix(), "media");
    assert!(storage.disable_local_storage);

    let graphql = GraphQlConfig::default();
    assert!(graphql.disable);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "environment": "development",
        "secret": "top-secret",
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "postgres://db:5432/folio", "max_connections": 4 },
        "storage": {
            "public_hostname": "cdn.example.com",
            "upload_prefix": "assets",
            "bucket": "b"
        }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.environment, RuntimeEnv::Development);
    assert_eq!(cfg.secret, "top-secret");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.max_connections, 4);
    assert_eq!(cfg.storage.prefix(), "assets");
    assert_eq!(cfg.i18n.supported_languages, vec![Language::En]);
}

#[test]
fn unknown_environment_behaves_like_production() {
    let env = RuntimeEnv::from("staging");
    assert!(!env.is_development());
    assert!(!env.is_production());
    assert_eq!(env.as_str(), "staging");

    let login = AutoLogin::resolve(&env, Some("hunter2"));
    assert_eq!(login.email, "user@withpayload.com");
    assert_eq!(login.password.as_deref(), Some("test"));
}

#[test]
fn auto_login_matrix() {
    let dev = AutoLogin::resolve(&RuntimeEnv::Development, Some("hunter2"));
    assert_eq!(dev.email, "admin@withpayload.com");
    assert_eq!(dev.password.as_deref(), Some("hunter2"));
    assert!(dev.prefill_only);

    let dev_no_password = AutoLogin::resolve(&RuntimeEnv::Development, None);
    assert_eq!(dev_no_password.password, None);

    let prod = AutoLogin::resolve(&RuntimeEnv::Production, Some("hunter2"));
    assert_eq!(prod.email, "user@withpayload.com");
    assert_eq!(prod.password.as_deref(), Some("test"));
    assert!(prod.prefill_only);
}
