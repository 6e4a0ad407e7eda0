//! Axum route handlers for the writing assistants backed by `TextGenerator`.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::handlers::check_job_description;
use crate::analysis::job_match::analyze_job_match;
use crate::errors::AppError;
use crate::models::resume::{ExperienceEntry, Resume};
use crate::state::AppState;
use crate::text_generation::{
    analyze_job_description, generate_cover_letter, generate_interview_questions,
    generate_summary, JobInsights, JobPosting,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInsightsRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume: Resume,
    pub posting: JobPosting,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    pub posting: JobPosting,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/job-insights
pub async fn handle_job_insights(
    State(state): State<AppState>,
    Json(request): Json<JobInsightsRequest>,
) -> Result<Json<JobInsights>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    check_job_description(&state, &request.job_description)?;

    let insights = analyze_job_description(state.generator.as_ref(), &request.job_description).await;
    info!(
        level = %insights.experience_level,
        requirements = insights.key_requirements.len(),
        "Job insights ready"
    );
    Ok(Json(insights))
}

/// POST /api/v1/cover-letter
///
/// The posting text is matched against the resume first so the letter can
/// address the skills the resume does not show.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    check_job_description(&state, &request.posting.description)?;

    let report = (!request.posting.description.is_empty())
        .then(|| analyze_job_match(&request.resume, &request.posting.description));
    let cover_letter = generate_cover_letter(
        state.generator.as_ref(),
        &request.resume,
        &request.posting,
        report.as_ref(),
    )
    .await;

    debug!(chars = cover_letter.len(), "Cover letter ready");
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    check_job_description(&state, &request.posting.description)?;

    let questions = generate_interview_questions(state.generator.as_ref(), &request.posting).await;
    debug!(count = questions.len(), "Interview questions ready");
    Ok(Json(InterviewQuestionsResponse { questions }))
}

/// POST /api/v1/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let target_role = request.target_role.as_deref();
    let today = Utc::now().date_naive();

    let summary =
        generate_summary(state.generator.as_ref(), &request.experience, target_role, today).await;
    debug!(entries = request.experience.len(), "Summary ready");
    Ok(Json(SummaryResponse { summary }))
}
