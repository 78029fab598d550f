use fhub_domain::collections::{CollectionDef, FieldDef, GlobalDef, UploadDef};
use fhub_domain::registry::CollectionRegistry;

fn media() -> CollectionDef {
    CollectionDef::new("media", "Media")
        .upload(UploadDef::images())
        .field(FieldDef::text("alt").required())
}

#[test]
fn registry_preserves_order_and_rejects_duplicates() {
    let mut registry = CollectionRegistry::new();
    registry.register(media()).expect("first registration");
    registry
        .register(CollectionDef::new("posts", "Posts").field(FieldDef::text("title").required()))
        .expect("second registration");

    let slugs: Vec<&str> =
        registry.collections().iter().map(|c| c.slug.as_ref()).collect();
    assert_eq!(slugs, ["media", "posts"]);

    let err = registry.register(media()).expect_err("duplicate slug");
    assert_eq!(err.slug, "media");
    assert_eq!(registry.len(), 2);
}

#[test]
fn globals_are_slug_unique() {
    let mut registry = CollectionRegistry::new();
    registry
        .register_global(GlobalDef::new("site-settings", "Site Settings"))
        .expect("global registration");
    assert!(registry.register_global(GlobalDef::new("site-settings", "Again")).is_err());
    assert_eq!(registry.globals().len(), 1);
}

#[test]
fn manifest_serialization_is_stable() {
    let mut registry = CollectionRegistry::new();
    registry.register(media()).unwrap();

    let value = serde_json::to_value(&registry).expect("serialize registry");
    let collections = value["collections"].as_array().expect("collections array");
    assert_eq!(collections[0]["slug"], "media");
    assert_eq!(collections[0]["fields"][0]["type"], "text");
    assert_eq!(collections[0]["upload"]["disable_local_storage"], true);
}
