pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::answers;
use crate::scoring;
use crate::state::AppState;
use crate::store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(scoring::handlers::handle_analyze))
        // Answers API
        .route("/api/v1/answers", post(answers::handlers::handle_answer))
        // History & preferences
        .route(
            "/api/v1/applications",
            get(store::handlers::handle_list_applications),
        )
        .route(
            "/api/v1/preferences",
            post(store::handlers::handle_save_preferences),
        )
        .route(
            "/api/v1/preferences/:user_id",
            get(store::handlers::handle_get_preferences),
        )
        .with_state(state)
}
