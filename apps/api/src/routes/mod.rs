pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::separators::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/separators/layout", post(handlers::handle_layout))
        .with_state(state)
}
