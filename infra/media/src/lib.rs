//! # Media Storage
//!
//! S3-backed object storage for upload collections. Local disk storage is
//! deliberately not supported; uploads only land in the bucket, and public
//! URLs are generated from a configured hostname.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fhub_media::MediaStorage;
//!
//! # async fn example() -> Result<(), fhub_media::MediaError> {
//! let media = MediaStorage::builder()
//!     .hostname("cdn.example.com")
//!     .bucket("folio-media")
//!     .connect()
//!     .await?;
//!
//! assert_eq!(media.file_url("x.png"), "https://cdn.example.com/media/x.png");
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{MediaError, MediaErrorExt};

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use private::Sealed;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Upload key prefix applied when no explicit prefix is configured.
const DEFAULT_PREFIX: &str = "media";

/// Where public media URLs point to. Pure data; URL generation needs no
/// network access and no credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLocation {
    hostname: String,
    prefix: String,
}

impl MediaLocation {
    /// Creates a location. `prefix = None` falls back to `"media"`.
    #[must_use]
    pub fn new(hostname: impl Into<String>, prefix: Option<&str>) -> Self {
        let prefix = prefix
            .map(|p| p.trim_matches('/'))
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PREFIX)
            .to_owned();
        Self { hostname: hostname.into(), prefix }
    }

    /// Object key for a stored file: `{prefix}/{filename}`.
    #[must_use]
    pub fn key(&self, filename: &str) -> String {
        format!("{}/{filename}", self.prefix)
    }

    /// Public URL for a stored file: `https://{hostname}/{prefix}/{filename}`.
    #[must_use]
    pub fn file_url(&self, filename: &str) -> String {
        format!("https://{}/{}/{filename}", self.hostname, self.prefix)
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[derive(Debug)]
struct MediaStorageInner {
    client: S3Client,
    bucket: String,
    location: MediaLocation,
}

/// Thread-safe handle to the configured object store.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    inner: Arc<MediaStorageInner>,
}

#[derive(Debug, Clone, Default)]
struct MediaConfig {
    bucket: Option<String>,
    prefix: Option<String>,
    region: Option<String>,
    endpoint: Option<String>,
}

#[derive(Debug, Default)]
pub struct NoHost;
#[derive(Debug)]
pub struct WithHost(String);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoHost {}
impl Sealed for WithHost {}

/// A fluent builder for configuring and connecting [`MediaStorage`].
#[allow(private_bounds)]
#[must_use = "builders do nothing unless you call .connect()"]
#[derive(Debug, Default)]
pub struct MediaStorageBuilder<S: Sealed = NoHost> {
    state: S,
    config: MediaConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> MediaStorageBuilder<S> {
    /// Sets the bucket uploads are written to.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.config.bucket = Some(bucket.into());
        self
    }

    /// Sets the upload key prefix. Unset falls back to `"media"`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Sets an explicit AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = Some(region.into());
        self
    }

    /// Sets a custom endpoint for S3-compatible stores (e.g. MinIO).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    fn transition<N: Sealed>(self, state: N) -> MediaStorageBuilder<N> {
        MediaStorageBuilder { state, config: self.config }
    }
}

impl MediaStorageBuilder<NoHost> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public hostname media URLs are generated from.
    pub fn hostname(self, hostname: impl Into<String>) -> MediaStorageBuilder<WithHost> {
        self.transition(WithHost(hostname.into()))
    }
}

impl MediaStorageBuilder<WithHost> {
    /// Consumes the configuration and connects the S3 client.
    ///
    /// Credentials and default region come from the ambient AWS environment
    /// (env vars, profile, IMDS); the builder only overrides what the
    /// platform config specifies.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Validation`] if no bucket was configured.
    pub async fn connect(self) -> Result<MediaStorage, MediaError> {
        let bucket = self.config.bucket.ok_or(MediaError::Validation {
            message: "Bucket is required".into(),
            context: None,
        })?;

        let base = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&base);

        if let Some(region) = self.config.region {
            builder = builder.region(Region::new(region));
        }
        if let Some(endpoint) = self.config.endpoint {
            // Path-style addressing keeps MinIO-style endpoints working.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = S3Client::from_conf(builder.build());
        let location = MediaLocation::new(self.state.0, self.config.prefix.as_deref());

        info!(bucket = %bucket, prefix = %location.prefix(), "Media storage connected");

        Ok(MediaStorage {
            inner: Arc::new(MediaStorageInner { client, bucket, location }),
        })
    }
}

impl MediaStorage {
    /// Returns a new [`MediaStorageBuilder`].
    pub fn builder() -> MediaStorageBuilder<NoHost> {
        MediaStorageBuilder::new()
    }

    /// Public URL for a stored file.
    #[must_use]
    pub fn file_url(&self, filename: &str) -> String {
        self.inner.location.file_url(filename)
    }

    /// Uploads a file and returns its public URL.
    #[instrument(skip(self, bytes), fields(bucket = %self.inner.bucket))]
    pub async fn store(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, MediaError> {
        let key = self.inner.location.key(filename);
        debug!(%key, size = bytes.len(), "Uploading object");

        self.inner
            .client
            .put_object()
            .bucket(&self.inner.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| MediaError::Storage {
                message: e.to_string().into(),
                context: Some(key.clone().into()),
            })?;

        Ok(self.inner.location.file_url(filename))
    }

    /// Removes a stored file. Missing objects are not an error.
    #[instrument(skip(self), fields(bucket = %self.inner.bucket))]
    pub async fn remove(&self, filename: &str) -> Result<(), MediaError> {
        let key = self.inner.location.key(filename);

        self.inner
            .client
            .delete_object()
            .bucket(&self.inner.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| MediaError::Storage {
                message: e.to_string().into(),
                context: Some(key.into()),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_falls_back_to_media_prefix() {
        let location = MediaLocation::new("cdn.example.com", None);
        assert_eq!(location.file_url("x.png"), "https://cdn.example.com/media/x.png");
    }

    #[test]
    fn file_url_uses_configured_prefix() {
        let location = MediaLocation::new("cdn.example.com", Some("assets"));
        assert_eq!(location.file_url("hero.jpg"), "https://cdn.example.com/assets/hero.jpg");
        assert_eq!(location.key("hero.jpg"), "assets/hero.jpg");
    }

    #[test]
    fn empty_prefix_behaves_like_unset() {
        let location = MediaLocation::new("cdn.example.com", Some(""));
        assert_eq!(location.prefix(), "media");

        let trimmed = MediaLocation::new("cdn.example.com", Some("/media/"));
        assert_eq!(trimmed.key("x.png"), "media/x.png");
    }
}
