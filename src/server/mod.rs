mod handlers;

pub use handlers::{create_user, root, ApiError};

use crate::core::gateway::AtprotoClient;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway's handlers. Holds only the upstream client;
/// there is no mutable state between requests.
pub struct AppState {
    pub atproto: AtprotoClient,
}

/// Builds the gateway router: the welcome endpoint, the user-creation
/// forwarder, and the CORS and request-trace layers.
pub fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/users/", post(create_user))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The wildcard "*" selects a permissive policy (any origin, no
/// credentials). An explicit origin list allows credentials; tower-http
/// refuses the wildcard-with-credentials combination the original FastAPI
/// setup shipped with, which is what we want.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!(
            "CORS allows any origin; restrict --allowed-origins outside local development"
        );
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping unusable CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
