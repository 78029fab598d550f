//! Registries for modular features.
//!
//! Two registries live here: a minimal type-erased container for
//! pre-initialized feature state, and the ordered collection registry that
//! feature slices contribute their schemas to.

use crate::collections::{CollectionDef, GlobalDef};
use serde::Serialize;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Create a new initialized slice from a concrete state.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}

/// Ordered, slug-unique set of collections and globals.
///
/// Registration order is preserved; it determines migration and manifest
/// order, so slices must be registered deterministically.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CollectionRegistry {
    collections: Vec<CollectionDef>,
    globals: Vec<GlobalDef>,
}

/// Raised when two slices claim the same slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub slug: String,
}

impl std::fmt::Display for DuplicateSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate slug in collection registry: {}", self.slug)
    }
}

impl std::error::Error for DuplicateSlug {}

impl CollectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a collection, rejecting duplicate slugs.
    pub fn register(&mut self, def: CollectionDef) -> Result<(), DuplicateSlug> {
        if self.get(&def.slug).is_some() {
            return Err(DuplicateSlug { slug: def.slug.clone().into_owned() });
        }
        self.collections.push(def);
        Ok(())
    }

    /// Registers every collection of a slice, in the slice's declared order.
    pub fn register_all(
        &mut self,
        defs: impl IntoIterator<Item = CollectionDef>,
    ) -> Result<(), DuplicateSlug> {
        for def in defs {
            self.register(def)?;
        }
        Ok(())
    }

    /// Registers a singleton global, rejecting duplicate slugs.
    pub fn register_global(&mut self, def: GlobalDef) -> Result<(), DuplicateSlug> {
        if self.globals.iter().any(|g| g.slug == def.slug) {
            return Err(DuplicateSlug { slug: def.slug.clone().into_owned() });
        }
        self.globals.push(def);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&CollectionDef> {
        self.collections.iter().find(|c| c.slug == slug)
    }

    #[must_use]
    pub fn collections(&self) -> &[CollectionDef] {
        &self.collections
    }

    #[must_use]
    pub fn globals(&self) -> &[GlobalDef] {
        &self.globals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }
}
