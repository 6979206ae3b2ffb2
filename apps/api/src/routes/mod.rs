pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extract::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse", post(handlers::handle_parse))
        .with_state(state)
}
