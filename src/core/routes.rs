// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Roster page and its actions
        .route("/", get(crate::handlers::roster::index_handler))
        .route("/users", post(crate::handlers::roster::add_user_handler))
        .route(
            "/frequency",
            get(crate::handlers::roster::assign_frequency_form_handler)
                .post(crate::handlers::roster::assign_frequency_handler),
        )
        .route(
            "/users/{id}/delete",
            get(crate::handlers::roster::confirm_delete_handler)
                .post(crate::handlers::roster::delete_user_handler),
        )
        .route("/users/{id}/status", post(crate::handlers::roster::cycle_status_handler))

        // Read-only JSON and monitoring
        .route("/api/roster", get(crate::handlers::api::roster_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
