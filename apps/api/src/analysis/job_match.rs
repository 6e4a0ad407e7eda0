//! Job-Match Analyzer: vocabulary overlap between a resume and a raw job description.
//!
//! Algorithm:
//! 1. Lower-case the serialized resume and the job text.
//! 2. For each vocabulary term: in both → matching, job only → missing, else ignored.
//! 3. match_percentage = round(100 × matching / terms present in the job), 0 if none.
//! 4. Experience relevance via the domain keyword table.

use serde::{Deserialize, Serialize};

use crate::analysis::capitalize_first;
use crate::analysis::keywords::{domain_keywords_for, SKILL_VOCABULARY};
use crate::models::resume::Resume;

const LOW_MATCH_THRESHOLD: u32 = 50;
const MAX_SKILLS_TO_RECOMMEND: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_percentage: u32, // 0 – 100
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub resume_optimizations: Vec<String>,
}

pub fn analyze_job_match(resume: &Resume, job_description: &str) -> MatchReport {
    let resume_text = resume.search_text().to_lowercase();
    let job_lower = job_description.to_lowercase();

    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for term in SKILL_VOCABULARY.iter().filter(|t| job_lower.contains(*t)) {
        if resume_text.contains(term) {
            matching_skills.push(capitalize_first(term));
        } else {
            missing_skills.push(capitalize_first(term));
        }
    }

    let relevant = matching_skills.len() + missing_skills.len();
    let match_percentage = if relevant > 0 {
        ((matching_skills.len() as f64 / relevant as f64) * 100.0).round() as u32
    } else {
        0
    };

    let mut recommendations = Vec::new();
    let mut resume_optimizations = Vec::new();

    if match_percentage < LOW_MATCH_THRESHOLD {
        recommendations.push("Consider acquiring some of the missing skills".to_string());
        resume_optimizations.push("Highlight skills that match the job description".to_string());
    }

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(MAX_SKILLS_TO_RECOMMEND)
            .map(String::as_str)
            .collect();
        recommendations.push(format!(
            "Add these skills to your resume: {}",
            top.join(", ")
        ));
    }

    if count_experience_hits(resume, &job_lower) == 0 {
        resume_optimizations
            .push("Highlight relevant experience that matches the job requirements".to_string());
        recommendations.push("Emphasize transferable skills from your experience".to_string());
    }

    MatchReport {
        match_percentage,
        matching_skills,
        missing_skills,
        recommendations,
        resume_optimizations,
    }
}

/// Counts (entry, keyword) hits of the job's domain keywords in each entry's
/// position, description and company.
fn count_experience_hits(resume: &Resume, job_lower: &str) -> usize {
    let keywords = domain_keywords_for(job_lower);
    resume
        .experience
        .iter()
        .map(|exp| {
            let text =
                format!("{} {} {}", exp.position, exp.description, exp.company).to_lowercase();
            keywords.iter().filter(|k| text.contains(*k)).count()
        })
        .sum()
}
