use crate::{
    AppState, add_points, get_ledger, get_rewards, health, sign_in, sign_up, start_watch,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        // Ledger endpoint
        .route("/api/addPoints", post(add_points))
        // REST API
        .route("/api/v1/auth/signup", post(sign_up))
        .route("/api/v1/auth/login", post(sign_in))
        .route("/api/v1/ledger/{uid}", get(get_ledger))
        .route("/api/v1/watch/start", post(start_watch))
        .route("/api/v1/rewards", get(get_rewards))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// Allow any origin unless specific origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
