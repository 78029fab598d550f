use super::state::ApiState;
use super::{collections, health};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}

/// Routes that need the full API state (schema introspection).
pub fn schema_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(collections::collections_handler))
}
