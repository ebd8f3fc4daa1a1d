use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router for the definition service
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:word", get(handlers::get_definition))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
