use fhub_domain::collections::{CollectionDef, FieldDef};
use fhub_domain::constants::{MEDIA, POSTS};

/// Collections contributed by the blog slice.
#[must_use]
pub fn collections() -> Vec<CollectionDef> {
    vec![
        CollectionDef::new(POSTS, "Posts")
            .field(FieldDef::text("title").required())
            .field(FieldDef::text("slug").required().unique())
            .field(FieldDef::rich_text("content"))
            .field(FieldDef::text("excerpt"))
            .field(FieldDef::upload_ref("cover", MEDIA))
            .field(FieldDef::new("published_at", fhub_domain::collections::FieldKind::Date)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::collections::FieldKind;

    #[test]
    fn posts_collection_shape() {
        let defs = collections();
        let posts = &defs[0];
        assert_eq!(posts.slug, POSTS);

        let slug = posts.find_field("slug").expect("slug field");
        assert!(slug.required && slug.unique);

        let content = posts.find_field("content").expect("content field");
        assert_eq!(content.kind, FieldKind::RichText);
    }
}
