//! Users feature slice: account schema and admin lookups.

pub mod collections;
mod error;
#[cfg(feature = "server")]
pub mod migrations;
#[cfg(feature = "server")]
pub mod queries;

pub use crate::error::{UsersError, UsersErrorExt};
use fhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Users feature state
#[derive(Debug, Clone)]
pub struct UsersInner {}

#[derive(Debug, Clone)]
pub struct Users {
    inner: Arc<UsersInner>,
}

impl Users {
    pub fn new(inner: UsersInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Users {
    type Target = UsersInner;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Users {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the users feature.
///
/// Extend this function to wire repositories/services when they are implemented.
///
/// # Errors
/// Currently infallible; returns a result for uniformity with other slices.
#[cfg(feature = "server")]
pub fn init() -> Result<InitializedSlice, UsersError> {
    tracing::info!("Users server slice initialized");

    let inner = UsersInner {};
    let slice = Users::new(inner);

    Ok(InitializedSlice::new(slice))
}
