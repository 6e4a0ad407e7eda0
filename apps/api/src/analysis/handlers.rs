//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::bullets::rewrite_bullet;
use crate::analysis::improvements::suggest_improvements;
use crate::analysis::job_match::{analyze_job_match, MatchReport};
use crate::analysis::quality::{analyze_quality, QualityReport};
use crate::analysis::skills::suggest_skills;
use crate::analysis::char_len;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRequest {
    pub resume: Resume,
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    pub resume: Resume,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisRequest {
    pub resume: Resume,
    pub target_role: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisResponse {
    pub quality: QualityReport,
    pub job_match: Option<MatchReport>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteBulletsRequest {
    pub bullets: Vec<String>,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteBulletsResponse {
    pub bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsRequest {
    pub job_description: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/quality
pub async fn handle_quality(
    Json(request): Json<QualityRequest>,
) -> Result<Json<QualityReport>, AppError> {
    let report = analyze_quality(&request.resume, non_blank(&request.target_role));
    info!(
        score = report.overall_score,
        weaknesses = report.weaknesses.len(),
        "Quality analysis complete"
    );
    Ok(Json(report))
}

/// POST /api/v1/analysis/job-match
///
/// An empty job description is valid and scores 0.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    check_job_description(&state, &request.job_description)?;

    let report = analyze_job_match(&request.resume, &request.job_description);
    info!(
        match_percentage = report.match_percentage,
        missing = report.missing_skills.len(),
        "Job match analysis complete"
    );
    Ok(Json(report))
}

/// POST /api/v1/analysis/improvements
pub async fn handle_improvements(
    Json(request): Json<QualityRequest>,
) -> Result<Json<ImprovementsResponse>, AppError> {
    let suggestions = suggest_improvements(&request.resume, non_blank(&request.target_role));
    debug!(count = suggestions.len(), "Content suggestions generated");
    Ok(Json(ImprovementsResponse { suggestions }))
}

/// POST /api/v1/analysis
///
/// Quality report and content suggestions always; job match whenever a
/// non-empty job description is supplied, even one that is only whitespace.
pub async fn handle_full_analysis(
    State(state): State<AppState>,
    Json(request): Json<FullAnalysisRequest>,
) -> Result<Json<FullAnalysisResponse>, AppError> {
    let target_role = non_blank(&request.target_role);

    let job_match = match request.job_description.as_deref().filter(|jd| !jd.is_empty()) {
        Some(jd) => {
            check_job_description(&state, jd)?;
            Some(analyze_job_match(&request.resume, jd))
        }
        None => None,
    };

    let quality = analyze_quality(&request.resume, target_role);
    let improvements = suggest_improvements(&request.resume, target_role);

    info!(
        score = quality.overall_score,
        match_percentage = ?job_match.as_ref().map(|m| m.match_percentage),
        suggestions = improvements.len(),
        "Full analysis complete"
    );

    Ok(Json(FullAnalysisResponse {
        quality,
        job_match,
        improvements,
    }))
}

/// POST /api/v1/bullets/rewrite
pub async fn handle_rewrite_bullets(
    State(state): State<AppState>,
    Json(request): Json<RewriteBulletsRequest>,
) -> Result<Json<RewriteBulletsResponse>, AppError> {
    if request.bullets.is_empty() {
        return Err(AppError::Validation("bullets cannot be empty".to_string()));
    }
    let limit = state.config.max_bullets_per_request;
    if request.bullets.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} bullets may be rewritten per request"
        )));
    }

    let context = request.context.as_deref();
    let bullets: Vec<String> = request
        .bullets
        .iter()
        .map(|b| rewrite_bullet(b, context))
        .collect();

    debug!(count = bullets.len(), "Bullets rewritten");
    Ok(Json(RewriteBulletsResponse { bullets }))
}

/// POST /api/v1/skills/suggest
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    check_job_description(&state, &request.job_description)?;
    let skills = suggest_skills(&request.job_description, &request.current_skills);
    Ok(Json(SuggestSkillsResponse { skills }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Treats `None` and whitespace-only strings alike.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub(crate) fn check_job_description(state: &AppState, job_description: &str) -> Result<(), AppError> {
    let limit = state.config.max_job_description_chars;
    if char_len(job_description) > limit {
        return Err(AppError::PayloadTooLarge(format!(
            "job_description exceeds {limit} characters"
        )));
    }
    Ok(())
}
