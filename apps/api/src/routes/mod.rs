pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-content",
            post(handlers::handle_generate_content),
        )
        .with_state(state)
}
