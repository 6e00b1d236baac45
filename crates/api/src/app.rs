use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::{compliance, health, schedule};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub fn create_app(config: Config) -> Router {
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        // Health probes
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        // Scheduling (v1)
        .route(
            "/api/v1/schedule/distribution",
            post(schedule::propose_distribution),
        )
        .route(
            "/api/v1/schedule/occurrences",
            post(schedule::expand_occurrences),
        )
        .route(
            "/api/v1/schedule/suggestions",
            post(schedule::suggest_recurring),
        )
        // Compliance (v1)
        .route(
            "/api/v1/compliance/evaluation",
            post(compliance::evaluate_target),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .with_state(state)
}
