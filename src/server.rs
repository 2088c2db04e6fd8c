//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use ascii_art::{GlyphRamp, Palette, DEFAULT_RAMP, DEFAULT_STEP};

use crate::api;
use crate::models::AppConfig;

/// Application state shared across all handlers.
///
/// The glyph ramp and palette are built once at startup and shared
/// read-only; each request allocates its own pixel grid and brightness
/// map, so no per-request synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ramp: Arc<GlyphRamp>,
    pub palette: Arc<Palette>,
}

/// Create application state from a configuration.
pub fn create_app_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let ramp = Arc::new(GlyphRamp::new(DEFAULT_RAMP)?);
    let palette = Arc::new(Palette::uniform(DEFAULT_STEP)?);

    Ok(AppState {
        config,
        ramp,
        palette,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/convert", post(api::handle_convert))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state, upload limit and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
}
