pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::ApiState;

use axum::{Router, routing::get};

pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route("/sakes", get(handlers::list_sakes))
        .route("/health", get(handlers::health))
        .with_state(state)
}
