//! Golf API: relays the DataGolf tournament field and serves the season
//! schedule and world rankings from local workbooks.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod sources;

pub use config::Config;

/// Shared by every handler. Holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

/// Cross-origin policy for the whole app: one origin, GET/POST/OPTIONS,
/// Content-Type and Authorization headers.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config.allowed_origin.clone());

    Router::new()
        // Root and health
        .route("/", get(routes::index::index))
        .route("/health", get(routes::health::health_check))

        // Data endpoints
        .route("/api/field", get(routes::field::get_field))
        .route("/api/schedule", get(routes::schedule::get_schedule))
        .route("/api/rankings", get(routes::rankings::get_rankings))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
