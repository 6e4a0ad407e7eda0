//! Text-generation boundary: the seam between the career tools and the hosted
//! generative-text service.
//!
//! The service itself lives outside this crate; it is plugged in as a
//! `TextGenerator` on `AppState`. Without one, `OfflineGenerator` answers every
//! call as unavailable. Every function here is infallible from the caller's side:
//! transport failures, empty output, and malformed JSON all collapse to local
//! fallbacks, logged at `warn`.
//!
//! The analysis engine never calls into this module. Its output flows the other
//! way: a `MatchReport`'s missing skills become cover-letter context, and the
//! rule-based summary writer stands in when generation fails.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::analysis::job_match::MatchReport;
use crate::analysis::summary::local_summary;
use crate::models::resume::{ExperienceEntry, Resume};
use crate::text_generation::prompts::{
    render, COVER_LETTER_PROMPT_TEMPLATE, INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
    JOB_INSIGHTS_PROMPT_TEMPLATE, JSON_ONLY_SYSTEM, SUMMARY_PROMPT_TEMPLATE, WRITER_SYSTEM,
};

/// Experience label used when the collaborator's answer cannot be used.
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "Mid-Level";
const COVER_LETTER_EXPERIENCE_ENTRIES: usize = 3;

pub const FALLBACK_INTERVIEW_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "Why are you interested in this position?",
    "What are your strengths and weaknesses?",
    "Where do you see yourself in 5 years?",
    "Why do you want to work for our company?",
];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Text generation unavailable: {0}")]
    Unavailable(String),

    #[error("Text generation returned empty content")]
    EmptyContent,
}

/// A hosted generative-text service. Implement this to plug a provider in.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Default generator when no provider is configured.
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable(
            "no text-generation provider configured".to_string(),
        ))
    }
}

/// Structured reading of a job description. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobInsights {
    pub key_requirements: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    pub benefits: Vec<String>,
}

impl Default for JobInsights {
    fn default() -> Self {
        Self {
            key_requirements: vec![],
            preferred_skills: vec![],
            experience_level: DEFAULT_EXPERIENCE_LEVEL.to_string(),
            salary_range: None,
            benefits: vec![],
        }
    }
}

/// The posting a cover letter or interview prep targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Job insights
// ────────────────────────────────────────────────────────────────────────────

/// Parses the collaborator's raw JSON answer. Never fails: anything unusable
/// yields `JobInsights::default()`.
pub fn parse_job_insights(raw: &str) -> JobInsights {
    match serde_json::from_str::<JobInsights>(strip_json_fences(raw)) {
        Ok(mut insights) => {
            if insights.experience_level.trim().is_empty() {
                insights.experience_level = DEFAULT_EXPERIENCE_LEVEL.to_string();
            }
            insights
        }
        Err(e) => {
            warn!("Job insights were not valid JSON, using defaults: {e}");
            JobInsights::default()
        }
    }
}

pub async fn analyze_job_description(
    generator: &dyn TextGenerator,
    job_description: &str,
) -> JobInsights {
    let prompt = render(
        JOB_INSIGHTS_PROMPT_TEMPLATE,
        &[("job_description", job_description)],
    );
    match generator.generate(JSON_ONLY_SYSTEM, &prompt).await {
        Ok(raw) => parse_job_insights(&raw),
        Err(e) => {
            warn!("Job insights generation failed, using defaults: {e}");
            JobInsights::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// Builds the cover-letter prompt. `match_report`, when present, contributes its
/// missing skills so the letter can address them.
pub fn cover_letter_prompt(
    resume: &Resume,
    posting: &JobPosting,
    match_report: Option<&MatchReport>,
) -> String {
    let experience = resume
        .experience
        .iter()
        .take(COVER_LETTER_EXPERIENCE_ENTRIES)
        .map(|exp| format!("{} at {}: {}", exp.position, exp.company, exp.description))
        .collect::<Vec<_>>()
        .join("\n");

    let missing_skills = match match_report {
        Some(report) if !report.missing_skills.is_empty() => report.missing_skills.join(", "),
        _ => "none".to_string(),
    };
    let applicant = applicant_name(resume);
    let skills = resume.skills.join(", ");

    render(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("title", posting.title.as_str()),
            ("company", posting.company.as_str()),
            ("job_description", posting.description.as_str()),
            ("applicant", applicant.as_str()),
            ("summary", resume.summary.as_str()),
            ("experience", experience.as_str()),
            ("skills", skills.as_str()),
            ("missing_skills", missing_skills.as_str()),
        ],
    )
}

pub fn fallback_cover_letter(resume: &Resume, posting: &JobPosting) -> String {
    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my interest in the {title} position at {company}.\n\n\
         Based on my experience and skills, I believe I would be a valuable addition to your team.\n\n\
         I look forward to discussing how my background aligns with your needs.\n\n\
         Sincerely,\n{name}",
        title = posting.title,
        company = posting.company,
        name = applicant_name(resume),
    )
}

pub async fn generate_cover_letter(
    generator: &dyn TextGenerator,
    resume: &Resume,
    posting: &JobPosting,
    match_report: Option<&MatchReport>,
) -> String {
    let prompt = cover_letter_prompt(resume, posting, match_report);
    match generate_text(generator, WRITER_SYSTEM, &prompt).await {
        Some(letter) => letter,
        None => fallback_cover_letter(resume, posting),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview questions and summary
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_interview_questions(
    generator: &dyn TextGenerator,
    posting: &JobPosting,
) -> Vec<String> {
    let prompt = render(
        INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
        &[
            ("title", posting.title.as_str()),
            ("company", posting.company.as_str()),
            ("job_description", posting.description.as_str()),
        ],
    );

    let questions: Vec<String> = generate_text(generator, WRITER_SYSTEM, &prompt)
        .await
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if questions.is_empty() {
        FALLBACK_INTERVIEW_QUESTIONS
            .iter()
            .map(|q| q.to_string())
            .collect()
    } else {
        questions
    }
}

/// Falls back to the rule-based summary writer, closing current entries at `today`.
pub async fn generate_summary(
    generator: &dyn TextGenerator,
    experience: &[ExperienceEntry],
    target_role: Option<&str>,
    today: NaiveDate,
) -> String {
    let experience_text = experience
        .iter()
        .map(|exp| {
            format!(
                "{} at {} ({} - {}): {}",
                exp.position, exp.company, exp.start_date, exp.end_date, exp.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = render(SUMMARY_PROMPT_TEMPLATE, &[("experience", experience_text.as_str())]);

    generate_text(generator, WRITER_SYSTEM, &prompt)
        .await
        .unwrap_or_else(|| local_summary(experience, target_role, today))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Calls the generator and returns trimmed, non-empty text, or `None` after logging.
async fn generate_text(generator: &dyn TextGenerator, system: &str, prompt: &str) -> Option<String> {
    match generator.generate(system, prompt).await {
        Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => {
            warn!("{}, using fallback", GenerationError::EmptyContent);
            None
        }
        Err(e) => {
            warn!("Text generation failed, using fallback: {e}");
            None
        }
    }
}

fn applicant_name(resume: &Resume) -> String {
    let info = &resume.personal_info;
    format!("{} {}", info.first_name, info.last_name)
        .trim()
        .to_string()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from generated output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
