//! Top-level router: every endpoint plus the CORS and trace layers.

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::evaluation::evaluation_router;
use super::knowledge::knowledge_router;
use super::service::service_router;
use super::state::ApiState;

/// Builds the API router.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn api_router(state: ApiState, cors_origins: &[String]) -> Router {
    Router::new()
        .merge(service_router())
        .merge(evaluation_router())
        .merge(knowledge_router())
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Listed origins, any method and header, credentials allowed.
///
/// Methods and headers are mirrored from the preflight because wildcards
/// cannot be combined with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
