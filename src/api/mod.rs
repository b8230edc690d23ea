//! HTTP server state, handlers and router

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::app::components::STYLESHEET_PATH;
use crate::config::Config;
use crate::ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started: Instant::now(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "staybooker-web",
        version: env!("STAYBOOKER_VERSION"),
        git_sha: env!("STAYBOOKER_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Server-rendered pages
        .route("/", get(ui::page_handler))
        .route("/hotels", get(ui::page_handler))
        .route("/login", get(ui::page_handler))
        .route("/user-profile", get(ui::page_handler))
        // Embedded stylesheet
        .route(STYLESHEET_PATH, get(ui::stylesheet_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
