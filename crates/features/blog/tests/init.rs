#![cfg(feature = "server")]

use fhub_blog::init;

#[test]
fn init_creates_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<fhub_blog::Blog>());
}
