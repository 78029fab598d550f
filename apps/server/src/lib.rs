//! # FolioHub Server
//!
//! A content platform server built on `Axum`, `PostgreSQL`, and S3-backed media storage.
//!
//! ## Example
//! ```no_run
//! use fhub_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(3000)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum_server::Handle;
use fhub::bootstrap::{self, InitOutcome, PlatformSeeder, Seeder};
use fhub::domain::config::ApiConfig;
use fhub::kernel::config::load_config;
use fhub::kernel::server::ApiState;
use fhub::kernel::typegen;
use fhub_database::Database;
use fhub_media::MediaStorage;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::signal;
use tracing::{error, info, warn};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    base_dir: PathBuf,
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self { cfg: ApiConfig::default(), base_dir: PathBuf::from(".") }
    }
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Loads configuration from an explicit file.
    ///
    /// Generated artifacts with relative paths (the type manifest) resolve
    /// against the file's directory rather than the working directory.
    ///
    /// # Errors
    /// Returns an error if the file is missing or malformed.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        self.cfg = load_config(Some(path)).context("Configuration is malformed")?;
        self.base_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    async fn init_database(&self) -> Result<Database> {
        let db_cfg = &self.cfg.database;
        let mut builder = Database::builder()
            .url(&db_cfg.url)
            .max_connections(db_cfg.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(db_cfg.acquire_timeout_seconds));

        for slice in fhub::migrations(self.cfg.features) {
            builder = builder.migrations(slice);
        }

        builder.init().await.context("Failed to establish database connection")
    }

    /// Connects media storage when a public hostname is configured.
    /// Without one, uploads are rejected and media URLs cannot be built.
    async fn init_media(&self) -> Result<Option<MediaStorage>> {
        let storage = &self.cfg.storage;
        let Some(hostname) = storage.public_hostname.as_deref() else {
            return Ok(None);
        };

        let mut builder = MediaStorage::builder()
            .bucket(&storage.bucket)
            .prefix(storage.prefix())
            .hostname(hostname);

        if let Some(region) = &storage.region {
            builder = builder.region(region);
        }
        if let Some(endpoint) = &storage.endpoint {
            builder = builder.endpoint(endpoint);
        }

        let media = builder.connect().await.context("Failed to connect media storage")?;
        Ok(Some(media))
    }

    fn validate_ssl_config(&self) -> Result<()> {
        if let Some(ssl) = &self.cfg.server.ssl {
            if !ssl.cert.exists() {
                anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
            }
            if !ssl.key.exists() {
                anyhow::bail!("SSL key not found at: {}", ssl.key.display());
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = ssl.key.metadata()?;
                if metadata.permissions().mode() & 0o077 != 0 {
                    tracing::warn!(
                        "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                        ssl.key.display()
                    );
                }
            }
        }
        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates SSL configuration
    /// 2. Establishes the database pool and applies slice migrations
    /// 3. Connects media storage when configured
    /// 4. Assembles the collection registry and writes the type manifest
    /// 5. Constructs application state from all feature slices
    /// 6. Runs the one-time seed pass
    ///
    /// A failed seed pass is logged and does not abort startup: the server
    /// stays usable for diagnosis and the pass re-runs on the next start.
    ///
    /// # Errors
    /// Returns an error if:
    /// * Database connection or a migration fails
    /// * SSL certificate/key files cannot be read
    /// * Two feature slices register the same collection slug
    pub async fn build(self) -> Result<Server> {
        // 1. Validate SSL Configuration
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);

        info!(
            address = %address,
            environment = self.cfg.environment.as_str(),
            "Initializing server"
        );

        if self.cfg.secret == fhub::domain::constants::FALLBACK_SECRET {
            warn!("PAYLOAD_SECRET is not set; using the insecure fallback secret");
        }

        // 2. Initialize Database
        let db = self.init_database().await?;

        // 3. Media storage (optional)
        let media = self.init_media().await?;
        if media.is_none() {
            warn!("No public hostname configured; media storage is disabled");
        }

        // 4. Collection registry + type manifest
        let registry = fhub::build_registry(self.cfg.features)
            .map_err(|e| anyhow!("Collection registry conflict: {e}"))?;
        typegen::write_manifest(&registry, &self.cfg.typegen, &self.base_dir)
            .context("Failed to write the type manifest")?;

        // 5. Orchestrate Feature Slices
        let slices =
            fhub::init(&self.cfg).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let pool = db.pool().clone();

        // 6. Construct State using Functional Folding
        let state = slices
            .into_iter()
            .fold(
                ApiState::builder().config(self.cfg).db(db).media(media).registry(registry),
                |builder, slice| builder.register_slice(slice),
            )
            .build()
            .context("Failed to finalize API state registry")?;

        // 7. One-time seed pass. Failures are logged, not fatal.
        let mut seeder = PlatformSeeder::new(pool);
        run_seed_pass(&mut seeder).await;

        Ok(Server { state })
    }
}

/// Runs the first-boot seed pass, absorbing any failure.
///
/// The server must come up either way: the database stays reachable for
/// diagnosis and the pass re-runs on the next start.
async fn run_seed_pass<S: Seeder>(seeder: &mut S) -> Option<InitOutcome> {
    match bootstrap::initialize(seeder).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Error during initialization:");
            error!("{e:?}");
            None
        }
    }
}

/// A fully initialized server instance ready to run.
///
/// This struct is returned by [`ServerBuilder::build`] and contains
/// all necessary runtime state.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    ///
    /// This is the recommended way to initialize the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    ///
    /// # Examples
    /// ```no_run
    /// # use fhub_server::Server;
    /// # async fn example() -> anyhow::Result<()> {
    /// Server::builder()
    ///     .build()
    ///     .await?
    ///     .run()
    ///     .await
    /// # }
    /// ```
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        info!(
            address = %address,
            ssl = cfg.server.ssl.is_some(),
            "Starting server"
        );

        let app = router::init(self.state);

        // 2. Set up Graceful Shutdown
        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        // Spawn shutdown signal listener
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        // 3. Start Server (HTTP or HTTPS)
        if let Some(ssl_config) = &cfg.server.ssl {
            // HTTPS mode
            info!("Starting HTTPS server on https://{address}");

            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &ssl_config.cert,
                &ssl_config.key,
            )
            .await
            .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            // HTTP mode
            info!("Starting HTTP server on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
///
/// This function waits for either:
/// * SIGINT (Ctrl+C)
/// * SIGTERM (sent by process managers like systemd)
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub::bootstrap::SeedStep;

    #[derive(Debug)]
    struct FlakySeeder {
        healthy: bool,
    }

    impl Seeder for FlakySeeder {
        type Error = std::io::Error;

        async fn is_initialized(&mut self) -> Result<bool, Self::Error> {
            Ok(false)
        }

        async fn seed(&mut self, _step: SeedStep) -> Result<(), Self::Error> {
            if self.healthy {
                Ok(())
            } else {
                Err(std::io::Error::other("connection reset"))
            }
        }
    }

    #[tokio::test]
    async fn failed_seed_pass_does_not_abort_startup() {
        let mut seeder = FlakySeeder { healthy: false };
        assert!(run_seed_pass(&mut seeder).await.is_none());
    }

    #[tokio::test]
    async fn seed_pass_reports_the_outcome() {
        let mut seeder = FlakySeeder { healthy: true };
        assert_eq!(run_seed_pass(&mut seeder).await, Some(InitOutcome::Seeded));
    }

    #[test]
    fn config_file_anchors_the_manifest_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "secret = \"s3cret\"\n").expect("write config");

        let builder = Server::builder().config_file(&path).expect("config should load");
        assert_eq!(builder.base_dir, dir.path());
        assert_eq!(builder.cfg.secret, "s3cret");
    }
}
