//! Skill Suggester: rule-based skill suggestions drawn from a job description.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::keywords::{NAMED_TECHNOLOGIES, SKILL_SUGGESTIONS};

pub const MAX_SUGGESTED_SKILLS: usize = 8;

fn capitalized_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[A-Z][a-zA-Z]+\b").expect("valid regex"))
}

/// Suggests up to eight skills the job description calls for and the candidate
/// does not already list. Trigger-table order first, then named technologies.
pub fn suggest_skills(job_description: &str, current_skills: &[String]) -> Vec<String> {
    let job_lower = job_description.to_lowercase();
    let mut suggested: Vec<String> = Vec::new();

    let offer = |skill: &str, suggested: &mut Vec<String>| {
        if suggested.len() < MAX_SUGGESTED_SKILLS
            && !current_skills.iter().any(|s| s == skill)
            && !suggested.iter().any(|s| s == skill)
        {
            suggested.push(skill.to_string());
        }
    };

    for (trigger, skills) in SKILL_SUGGESTIONS {
        if job_lower.contains(trigger) {
            for skill in *skills {
                offer(*skill, &mut suggested);
            }
        }
    }

    for word in capitalized_word_pattern().find_iter(job_description) {
        if NAMED_TECHNOLOGIES.contains(&word.as_str()) {
            offer(word.as_str(), &mut suggested);
        }
    }

    suggested
}
