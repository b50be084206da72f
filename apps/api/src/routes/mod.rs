pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::interview::handlers as interview_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route(
            "/api/v1/resume/analyze",
            post(resume_handlers::handle_analyze),
        )
        // Interview evaluation
        .route(
            "/api/v1/interview/evaluate",
            post(interview_handlers::handle_evaluate),
        )
        .route(
            "/api/v1/interview/summary",
            post(interview_handlers::handle_summary),
        )
        .with_state(state)
}
