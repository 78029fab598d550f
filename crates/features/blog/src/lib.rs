//! Blog feature slice: post schema and initial seed data.

pub mod collections;
mod error;
#[cfg(feature = "server")]
pub mod migrations;
#[cfg(feature = "server")]
pub mod seed;

pub use crate::error::{BlogError, BlogErrorExt};
use fhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Blog feature state
#[derive(Debug, Clone)]
pub struct BlogInner {}

#[derive(Debug, Clone)]
pub struct Blog {
    inner: Arc<BlogInner>,
}

impl Blog {
    pub fn new(inner: BlogInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Blog {
    type Target = BlogInner;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Blog {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the blog feature.
///
/// # Errors
/// Currently infallible; returns a result for uniformity with other slices.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, BlogError> {
    tracing::info!("Blog server slice initialized");

    let inner = BlogInner {};
    let slice = Blog::new(inner);

    Ok(InitializedSlice::new(slice))
}
