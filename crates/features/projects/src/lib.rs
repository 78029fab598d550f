//! Projects feature slice: portfolio schema and initial seed data.

pub mod collections;
mod error;
#[cfg(feature = "server")]
pub mod migrations;
#[cfg(feature = "server")]
pub mod seed;

pub use crate::error::{ProjectsError, ProjectsErrorExt};
use fhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Projects feature state
#[derive(Debug, Clone)]
pub struct ProjectsInner {}

#[derive(Debug, Clone)]
pub struct Projects {
    inner: Arc<ProjectsInner>,
}

impl Projects {
    pub fn new(inner: ProjectsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Projects {
    type Target = ProjectsInner;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Projects {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the projects feature.
///
/// # Errors
/// Currently infallible; returns a result for uniformity with other slices.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, ProjectsError> {
    tracing::info!("Projects server slice initialized");

    let inner = ProjectsInner {};
    let slice = Projects::new(inner);

    Ok(InitializedSlice::new(slice))
}
