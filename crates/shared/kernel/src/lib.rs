//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config
//! loading, the type manifest generator, and (behind the `server` feature)
//! the shared API state and system routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use fhub_kernel::config::load_config;
//! let cfg: fhub_domain::config::ApiConfig = load_config(None::<&str>).unwrap();
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod typegen;

pub use fhub_domain as domain;
