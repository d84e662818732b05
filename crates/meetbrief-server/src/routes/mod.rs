//! HTTP route handlers.

pub mod health;
pub mod summarize;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
///
/// The summarize endpoint is served under both the Netlify function path
/// and `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/.netlify/functions", summarize::routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(summarize::routes())
}
