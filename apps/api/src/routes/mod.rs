pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::text_generation::handlers as writing;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(handlers::handle_full_analysis))
        .route("/api/v1/analysis/quality", post(handlers::handle_quality))
        .route(
            "/api/v1/analysis/job-match",
            post(handlers::handle_job_match),
        )
        .route(
            "/api/v1/analysis/improvements",
            post(handlers::handle_improvements),
        )
        // Writing helpers
        .route(
            "/api/v1/bullets/rewrite",
            post(handlers::handle_rewrite_bullets),
        )
        .route(
            "/api/v1/skills/suggest",
            post(handlers::handle_suggest_skills),
        )
        // Writing assistants
        .route("/api/v1/job-insights", post(writing::handle_job_insights))
        .route("/api/v1/cover-letter", post(writing::handle_cover_letter))
        .route(
            "/api/v1/interview-questions",
            post(writing::handle_interview_questions),
        )
        .route("/api/v1/summary", post(writing::handle_summary))
        .with_state(state)
}
