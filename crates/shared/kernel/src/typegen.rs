//! Schema manifest generation for front-end type tooling.
//!
//! Serializes the collection registry into a JSON manifest that code
//! generators consume to produce typed client bindings. The manifest is
//! rewritten on every server start so it never drifts from the running
//! schema.

use fhub_domain::config::TypegenConfig;
use fhub_domain::registry::CollectionRegistry;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum TypegenError {
    #[error("Manifest serialization error{}: {source}", format_context(.context))]
    Serialize {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },
    #[error("Manifest write error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },
}

impl From<serde_json::Error> for TypegenError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source, context: None }
    }
}

impl From<std::io::Error> for TypegenError {
    #[inline]
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

pub trait TypegenErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, TypegenError>;
}

impl<T> TypegenErrorExt<T> for Result<T, TypegenError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                TypegenError::Serialize { context: c, .. } | TypegenError::Io { context: c, .. } => {
                    *c = Some(context.into());
                }
            }
            e
        })
    }
}

/// Writes the schema manifest for `registry` to the configured output file.
///
/// Relative output paths resolve against `base_dir`; absolute paths are
/// used as-is. Returns the path actually written.
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_manifest(
    registry: &CollectionRegistry,
    config: &TypegenConfig,
    base_dir: &Path,
) -> Result<PathBuf, TypegenError> {
    let output = resolve_output(base_dir, &config.output_file);

    let mut manifest = serde_json::to_string_pretty(registry)
        .map_err(TypegenError::from)
        .context("Failed to serialize collection registry")?;
    manifest.push('\n');

    std::fs::write(&output, manifest)
        .map_err(TypegenError::from)
        .context("Failed to write schema manifest")?;

    info!("Schema manifest written to {}", output.display());
    Ok(output)
}

fn resolve_output(base_dir: &Path, output_file: &Path) -> PathBuf {
    if output_file.is_absolute() { output_file.to_path_buf() } else { base_dir.join(output_file) }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::collections::{CollectionDef, FieldDef};

    fn sample_registry() -> CollectionRegistry {
        let mut registry = CollectionRegistry::default();
        registry
            .register(CollectionDef::new("posts", "Posts").field(FieldDef::text("title").required()))
            .expect("unique slug");
        registry
    }

    #[test]
    fn writes_manifest_relative_to_base_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = TypegenConfig { output_file: "folio-types.json".into() };

        let written = write_manifest(&sample_registry(), &config, dir.path()).expect("manifest");

        assert_eq!(written, dir.path().join("folio-types.json"));
        let content = std::fs::read_to_string(&written).expect("read manifest");
        let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
        assert_eq!(parsed["collections"][0]["slug"], "posts");
    }

    #[test]
    fn absolute_output_path_is_used_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let absolute = dir.path().join("types.json");
        let config = TypegenConfig { output_file: absolute.clone() };

        let written = write_manifest(&sample_registry(), &config, Path::new("/unused")).expect("manifest");
        assert_eq!(written, absolute);
        assert!(absolute.exists());
    }
}
