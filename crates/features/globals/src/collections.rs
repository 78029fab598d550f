use fhub_domain::collections::{CollectionDef, FieldDef, GlobalDef, UploadDef};
use fhub_domain::constants::{MEDIA, SITE_SETTINGS};

/// Collections contributed by the globals slice.
///
/// The media library lives here rather than in a dedicated slice: every
/// other slice references it, and globals is always registered first.
#[must_use]
pub fn collections() -> Vec<CollectionDef> {
    vec![
        CollectionDef::new(MEDIA, "Media")
            .upload(UploadDef::images())
            .field(FieldDef::text("alt").required()),
    ]
}

/// Singleton globals contributed by this slice.
#[must_use]
pub fn globals() -> Vec<GlobalDef> {
    vec![
        GlobalDef::new(SITE_SETTINGS, "Site Settings")
            .field(FieldDef::text("site_title").required())
            .field(FieldDef::text("site_description"))
            .field(FieldDef::upload_ref("logo", MEDIA)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::collections::FieldKind;

    #[test]
    fn media_collection_disables_local_storage() {
        let defs = collections();
        let media = &defs[0];
        assert_eq!(media.slug, MEDIA);

        let upload = media.upload.as_ref().expect("upload definition");
        assert!(upload.disable_local_storage);
        assert_eq!(upload.mime_types, ["image/*"]);
    }

    #[test]
    fn site_settings_references_media() {
        let globals = globals();
        assert_eq!(globals[0].slug, SITE_SETTINGS);

        let logo = globals[0].fields.iter().find(|f| f.name == "logo").expect("logo field");
        assert!(matches!(&logo.kind, FieldKind::Upload { to } if to == MEDIA));
    }
}
