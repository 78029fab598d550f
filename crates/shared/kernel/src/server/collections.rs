use axum::extract::State;
use axum::{Json, response::IntoResponse};
use fhub_domain::constants::SYSTEM_TAG;
use fhub_domain::registry::CollectionRegistry;

/// Schema introspection endpoint. Returns the same manifest that the
/// typegen writer emits, so clients can discover collections at runtime.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    path = "/collections",
    responses((status = OK, description = "Collection schema manifest")),
    tag = SYSTEM_TAG,
)]
pub(super) async fn collections_handler(State(registry): State<CollectionRegistry>) -> impl IntoResponse {
    Json(registry)
}
