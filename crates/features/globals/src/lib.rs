//! Globals feature slice: media library, site settings, and initial seed data.

pub mod collections;
mod error;
#[cfg(feature = "server")]
pub mod migrations;
#[cfg(feature = "server")]
pub mod seed;

pub use crate::error::{GlobalsError, GlobalsErrorExt};
use fhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Globals feature state
#[derive(Debug, Clone)]
pub struct GlobalsInner {}

#[derive(Debug, Clone)]
pub struct Globals {
    inner: Arc<GlobalsInner>,
}

impl Globals {
    pub fn new(inner: GlobalsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Globals {
    type Target = GlobalsInner;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Globals {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the globals feature.
///
/// # Errors
/// Currently infallible; returns a result for uniformity with other slices.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, GlobalsError> {
    tracing::info!("Globals server slice initialized");

    let inner = GlobalsInner {};
    let slice = Globals::new(inner);

    Ok(InitializedSlice::new(slice))
}
