#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, MethodRouter};
use axum::Router;
use batterytech_api::{
    ROUTE_BATTERIES, ROUTE_BATTERY, ROUTE_COMPARE, ROUTE_HEALTH, ROUTE_QUIZ, ROUTE_TIMELINE,
    ROUTE_UNITS,
};
use batterytech_query::QueryService;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod effect_adapters;
mod http;
mod middleware;
mod telemetry;

pub use config::{
    bind_address, cors_origins, ApiConfig, RateLimitConfig, ServerConfig, DEFAULT_DEV_ORIGIN,
    DEFAULT_PRODUCTION_ORIGIN,
};

use effect_adapters::random_adapters::QuizRng;
use middleware::cors::cors_middleware;
use middleware::rate_limit::rate_limit_middleware;
use middleware::request_tracing::request_tracing_middleware;
use telemetry::rate_limiter::RateLimiter;

pub const CRATE_NAME: &str = "batterytech-server";

#[derive(Clone)]
pub struct AppState {
    pub(crate) query: Arc<QueryService>,
    pub(crate) api: Arc<ApiConfig>,
    pub(crate) quiz_rng: Arc<QuizRng>,
    pub(crate) limiter: Arc<RateLimiter>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(query: QueryService) -> Self {
        Self::with_config(query, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(query: QueryService, api: ApiConfig) -> Self {
        let query = query.with_quiz_sample_size(api.quiz_sample_size);
        Self {
            query: Arc::new(query),
            quiz_rng: Arc::new(QuizRng::new(api.quiz_seed)),
            api: Arc::new(api),
            limiter: Arc::new(RateLimiter::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    #[must_use]
    pub fn api_config(&self) -> &ApiConfig {
        &self.api
    }
}

/// Every route also answers with a trailing slash, as non-strict routers do.
pub fn build_router(state: AppState) -> Router {
    let routes: [(&str, MethodRouter<AppState>); 7] = [
        (ROUTE_HEALTH, get(http::handlers::health_handler)),
        (ROUTE_BATTERIES, get(http::handlers::batteries_handler)),
        (ROUTE_BATTERY, get(http::handlers::battery_handler)),
        (ROUTE_COMPARE, get(http::handlers::compare_handler)),
        (ROUTE_QUIZ, get(http::handlers::quiz_handler)),
        (ROUTE_UNITS, get(http::handlers::units_handler)),
        (ROUTE_TIMELINE, get(http::handlers::timeline_handler)),
    ];
    let mut router = Router::new();
    for (path, handler) in routes {
        router = router
            .route(path, handler.clone())
            .route(&format!("{path}/"), handler);
    }
    router
        .fallback(http::handlers::fallback_handler)
        .layer(from_fn_with_state(state.clone(), rate_limit_middleware))
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
