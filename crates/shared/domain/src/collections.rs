//! Declarative collection and global schemas.
//!
//! A [`CollectionDef`] is data, not behavior: feature slices declare their
//! collections with these types and the facade assembles them into a
//! [`crate::registry::CollectionRegistry`]. Persistence and HTTP concerns
//! live elsewhere.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A named schema of structured records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDef {
    pub slug: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub fields: Vec<FieldDef>,
    /// Present for upload-backed collections (files live in object storage).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub upload: Option<UploadDef>,
    /// Adds `created_at`/`updated_at` bookkeeping columns.
    pub timestamps: bool,
}

impl CollectionDef {
    pub fn new(slug: impl Into<Cow<'static, str>>, label: impl Into<Cow<'static, str>>) -> Self {
        Self { slug: slug.into(), label: label.into(), fields: Vec::new(), upload: None, timestamps: true }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn upload(mut self, upload: UploadDef) -> Self {
        self.upload = Some(upload);
        self
    }

    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A singleton configuration record (one row, not a collection of many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDef {
    pub slug: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub fields: Vec<FieldDef>,
}

impl GlobalDef {
    pub fn new(slug: impl Into<Cow<'static, str>>, label: impl Into<Cow<'static, str>>) -> Self {
        Self { slug: slug.into(), label: label.into(), fields: Vec::new() }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// A single field of a collection or global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: Cow<'static, str>,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, required: false, unique: false }
    }

    pub fn text(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn rich_text(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::RichText)
    }

    pub fn email(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn select(
        name: impl Into<Cow<'static, str>>,
        options: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self::new(name, FieldKind::Select { options: options.into_iter().map(Cow::Borrowed).collect() })
    }

    pub fn upload_ref(name: impl Into<Cow<'static, str>>, to: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::Upload { to: to.into() })
    }

    pub fn relationship(name: impl Into<Cow<'static, str>>, to: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::Relationship { to: to.into() })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Field value shapes understood by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    /// Editor-backed content; the concrete editor comes from
    /// [`crate::config::EditorConfig`].
    RichText,
    Email,
    Select {
        options: Vec<Cow<'static, str>>,
    },
    Date,
    Number,
    Checkbox,
    Relationship {
        to: Cow<'static, str>,
    },
    Upload {
        to: Cow<'static, str>,
    },
}

/// Upload behavior for media-style collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDef {
    pub mime_types: Vec<Cow<'static, str>>,
    /// When set, files are written to object storage only.
    pub disable_local_storage: bool,
}

impl UploadDef {
    pub fn images() -> Self {
        Self { mime_types: vec![Cow::Borrowed("image/*")], disable_local_storage: true }
    }
}
