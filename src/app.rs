use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{explain, state::AppState};

/// Permissive CORS: every origin, method and header, with credentials.
///
/// Wildcards are illegal alongside credentials, so the request's own values are mirrored back.
pub fn cors_layer() -> CorsLayer {
    // TODO: restrict the origin to the frontend domain once it has a fixed deployment URL.
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(explain::router())
        .layer(cors_layer())
        .with_state(state)
}
