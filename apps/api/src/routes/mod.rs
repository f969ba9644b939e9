pub mod health;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analyses
        .route(
            "/api/v1/analyses",
            get(handlers::handle_list_analyses)
                .post(handlers::handle_analyze)
                .delete(handlers::handle_clear_history),
        )
        .route(
            "/api/v1/analyses/:id",
            get(handlers::handle_get_analysis).delete(handlers::handle_delete_analysis),
        )
        .route(
            "/api/v1/analyses/:id/confidence",
            patch(handlers::handle_update_confidence),
        )
        .route(
            "/api/v1/analyses/:id/export",
            get(handlers::handle_export),
        )
        // Current analysis
        .route(
            "/api/v1/current",
            get(handlers::handle_get_current).delete(handlers::handle_clear_current),
        )
        .route("/api/v1/current/:id", put(handlers::handle_set_current))
        .with_state(state)
}
