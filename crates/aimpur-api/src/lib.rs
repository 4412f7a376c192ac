//! HTTP front-end for the Aimpur calculators.
//!
//! Routes:
//!   * `GET  /health`
//!   * `GET  /calculators`
//!   * `POST /calculators/{name}` with `{"inputs": {...}}`
//!   * `GET  /presets/rooms`, `GET /presets/tiles`
//!
//! The service holds no per-request state; every calculation is a pure function
//! of its inputs.

use std::sync::Arc;
use std::time::Duration;

use aimpur_calculator::Calculator;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod tracing_setup;
pub mod types;

use config::AimpurConfig;

pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub calculator: Calculator,
    pub config: AimpurConfig,
}

impl AppState {
    pub fn new(config: AimpurConfig) -> Self {
        Self { start_time: Utc::now(), calculator: Calculator::new(), config }
    }
}

pub fn create_app(config: AimpurConfig) -> Router {
    let timeout = Duration::from_secs(config.limits.request_timeout_seconds);
    let body_limit = config.max_body_size_bytes();
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/calculators", get(handlers::list_calculators))
        .route("/calculators/{name}", post(handlers::calculate))
        .route("/presets/rooms", get(handlers::room_presets))
        .route("/presets/tiles", get(handlers::tile_presets))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .map_response(|res: axum::response::Response<_>| res.map(axum::body::Body::new))
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)),
        )
        .with_state(state)
}
