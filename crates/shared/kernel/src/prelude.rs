//! Convenience re-exports for slice and server code.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use fhub_domain::collections::{CollectionDef, FieldDef, FieldKind, GlobalDef, UploadDef};
pub use fhub_domain::config::{ApiConfig, RuntimeEnv};
pub use fhub_domain::registry::{CollectionRegistry, FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::state::{ApiState, ApiStateError};
