use fhub_domain::collections::{CollectionDef, FieldDef, FieldKind};
use fhub_domain::constants::{MEDIA, PROJECTS};

/// Collections contributed by the projects slice.
#[must_use]
pub fn collections() -> Vec<CollectionDef> {
    vec![
        CollectionDef::new(PROJECTS, "Projects")
            .field(FieldDef::text("title").required())
            .field(FieldDef::text("slug").required().unique())
            .field(FieldDef::rich_text("description"))
            .field(FieldDef::text("url"))
            .field(FieldDef::upload_ref("image", MEDIA))
            .field(FieldDef::new("featured", FieldKind::Checkbox)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_collection_shape() {
        let defs = collections();
        let projects = &defs[0];
        assert_eq!(projects.slug, PROJECTS);

        let slug = projects.find_field("slug").expect("slug field");
        assert!(slug.required && slug.unique);

        let image = projects.find_field("image").expect("image field");
        assert!(matches!(&image.kind, FieldKind::Upload { to } if to == MEDIA));
    }
}
