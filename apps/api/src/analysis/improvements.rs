//! Content Improvement Advisor: short, additive writing suggestions. No scoring.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::{char_len, has_digit};
use crate::models::resume::Resume;

const EXPANDED_SUMMARY_CHARS: usize = 100;
const MIN_KEY_TERM_CHARS: usize = 5;

fn year_month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("valid date regex"))
}

fn non_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid separator regex"))
}

pub fn suggest_improvements(resume: &Resume, target_role: Option<&str>) -> Vec<String> {
    let mut suggestions = Vec::new();

    // An empty summary is the quality analyzer's finding, not ours.
    if !resume.summary.is_empty() && char_len(&resume.summary) < EXPANDED_SUMMARY_CHARS {
        suggestions
            .push("Expand your professional summary to 100-200 words for better impact".to_string());
    }

    let all_text = resume.search_text();
    if !has_digit(&all_text) {
        suggestions.push(
            "Add specific numbers and percentages to quantify your achievements (e.g., \"Increased sales by 25%\")"
                .to_string(),
        );
    }

    if let Some(role) = target_role {
        let terms = key_terms(role);
        let all_lower = all_text.to_lowercase();
        let matched = terms.iter().filter(|t| all_lower.contains(t.as_str())).count();
        if (matched as f64) < terms.len() as f64 / 2.0 {
            suggestions.push(format!(
                "Incorporate more keywords from the job description ({role}) to improve ATS match"
            ));
        }
    }

    let inconsistent_dates = resume
        .experience
        .iter()
        .any(|exp| !exp.start_date.is_empty() && !year_month_pattern().is_match(&exp.start_date));
    if inconsistent_dates {
        suggestions
            .push("Use consistent date format (YYYY-MM) throughout your resume".to_string());
    }

    suggestions
}

/// Lower-cased words longer than four characters, duplicates kept.
fn key_terms(text: &str) -> Vec<String> {
    non_word_pattern()
        .split(&text.to_lowercase())
        .filter(|w| char_len(w) >= MIN_KEY_TERM_CHARS)
        .map(str::to_string)
        .collect()
}
