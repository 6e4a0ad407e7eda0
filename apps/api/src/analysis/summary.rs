//! Local Summary Writer: a rule-based professional summary built from work
//! history alone. Deterministic for a given reference date.
//!
//! Template choice, first match wins:
//! 1. a target role was given → targeted
//! 2. quantified achievements and leadership wording → impact-driven
//! 3. leadership in any description or position → leadership
//! 4. otherwise → standard

use chrono::NaiveDate;

use crate::analysis::has_digit;
use crate::analysis::keywords::{
    ENGINEERING_SUMMARY_SKILLS, IMPACT_LEADERSHIP_TERMS, INDUSTRY_TERMS,
    LEADERSHIP_DESCRIPTION_TERMS, LEADERSHIP_POSITION_TERMS, SUMMARY_SKILLS,
};
use crate::models::resume::ExperienceEntry;

pub const EMPTY_HISTORY_SUMMARY: &str =
    "Experienced professional seeking to leverage expertise in a challenging new role.";

const DEFAULT_POSITION: &str = "professional";
const DEFAULT_INDUSTRY: &str = "professional services";
const DEFAULT_COMPETENCIES: &str = "operations and management";
const MAX_SUMMARY_SKILLS: usize = 8;
const DAYS_PER_MONTH: f64 = 30.0;

/// Writes a 2-3 sentence summary. `today` closes any entry marked current.
pub fn local_summary(
    experience: &[ExperienceEntry],
    target_role: Option<&str>,
    today: NaiveDate,
) -> String {
    let Some(first) = experience.first() else {
        return EMPTY_HISTORY_SUMMARY.to_string();
    };

    let position = if first.position.is_empty() {
        DEFAULT_POSITION
    } else {
        first.position.as_str()
    };
    let years = total_years(experience, today);
    let industry = industry_of(experience);
    let skills = summary_skills(experience, target_role);

    if let Some(role) = target_role.filter(|r| !r.is_empty()) {
        return format!(
            "Results-driven {position} with {years}+ years of experience in {industry}. \
             Proven expertise in {} with a track record of delivering measurable impact. \
             Seeking to contribute expertise in {} role.",
            skill_list(&skills, 4),
            role.to_lowercase()
        );
    }

    if is_high_impact(experience) {
        format!(
            "Accomplished {position} with {years}+ years of {industry} experience. \
             Specialized in {} with demonstrated success in driving results and optimizing performance. \
             Strong background in strategic planning and execution.",
            skill_list(&skills, 3)
        )
    } else if has_leadership(experience) {
        format!(
            "Leadership-focused {position} with {years}+ years of experience managing teams \
             and delivering operational excellence. \
             Expertise in {} with a proven ability to drive organizational growth and team development.",
            skill_list(&skills, 3)
        )
    } else {
        format!(
            "Dedicated {position} with {years}+ years of experience in {industry}. \
             Proficient in {} with a commitment to quality and innovation. \
             Seeking opportunities to leverage expertise in challenging new environment.",
            skill_list(&skills, 3)
        )
    }
}

/// Whole years across all entries, counting 30-day months. Entries with an
/// unreadable start, or an unreadable end that is not current, count as zero.
fn total_years(experience: &[ExperienceEntry], today: NaiveDate) -> u32 {
    let months: f64 = experience
        .iter()
        .filter_map(|exp| {
            let start = parse_date(&exp.start_date)?;
            let end = if exp.is_current {
                today
            } else {
                parse_date(&exp.end_date)?
            };
            Some(((end - start).num_days() as f64 / DAYS_PER_MONTH).max(0.0))
        })
        .sum();
    (months / 12.0).floor() as u32
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    [raw.to_string(), format!("{raw}-01"), format!("{raw}-01-01")]
        .iter()
        .find_map(|candidate| NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok())
}

/// Only the first non-empty of company, position and description is inspected.
fn industry_of(experience: &[ExperienceEntry]) -> &'static str {
    let labels: Vec<String> = experience
        .iter()
        .map(|exp| {
            [&exp.company, &exp.position, &exp.description]
                .into_iter()
                .find(|field| !field.is_empty())
                .map(|field| field.to_lowercase())
                .unwrap_or_default()
        })
        .collect();

    INDUSTRY_TERMS
        .iter()
        .find(|(_, terms)| {
            labels
                .iter()
                .any(|label| terms.iter().any(|t| label.contains(t)))
        })
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}

fn summary_skills(experience: &[ExperienceEntry], target_role: Option<&str>) -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = Vec::new();
    for exp in experience {
        let text = format!(
            "{} {} {}",
            exp.description,
            exp.position,
            target_role.unwrap_or_default()
        )
        .to_lowercase();
        for (keyword, skill) in SUMMARY_SKILLS {
            if text.contains(keyword) && !skills.contains(skill) {
                skills.push(*skill);
            }
        }
    }

    let engineering = experience.iter().any(|exp| {
        let text = format!("{}{}", exp.position, exp.description).to_lowercase();
        text.contains("engineer") || text.contains("developer")
    });
    if engineering {
        for skill in ENGINEERING_SUMMARY_SKILLS {
            if !skills.contains(skill) {
                skills.push(*skill);
            }
        }
    }

    skills.truncate(MAX_SUMMARY_SKILLS);
    skills
}

fn is_high_impact(experience: &[ExperienceEntry]) -> bool {
    let quantified = experience
        .iter()
        .flat_map(|exp| &exp.achievements)
        .any(|a| has_digit(a));
    quantified
        && experience
            .iter()
            .any(|exp| mentions_any(&exp.description, IMPACT_LEADERSHIP_TERMS))
}

fn has_leadership(experience: &[ExperienceEntry]) -> bool {
    experience.iter().any(|exp| {
        mentions_any(&exp.description, LEADERSHIP_DESCRIPTION_TERMS)
            || mentions_any(&exp.position, LEADERSHIP_POSITION_TERMS)
    })
}

fn mentions_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|t| lower.contains(t))
}

fn skill_list(skills: &[&str], take: usize) -> String {
    if skills.is_empty() {
        return DEFAULT_COMPETENCIES.to_string();
    }
    skills
        .iter()
        .take(take)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn entry(company: &str, position: &str, start: &str, end: &str, description: &str) -> ExperienceEntry {
        ExperienceEntry {
            company: company.to_string(),
            position: position.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(local_summary(&[], Some("Analyst"), today()), EMPTY_HISTORY_SUMMARY);
    }

    #[test]
    fn test_targeted_summary() {
        let history = vec![entry(
            "Initech",
            "Backend Engineer",
            "2018-01",
            "2023-01",
            "Built billing software",
        )];
        assert_eq!(
            local_summary(&history, Some("Staff Engineer"), today()),
            "Results-driven Backend Engineer with 5+ years of experience in tech. \
             Proven expertise in Software Development, Full-Stack Development, Version Control (Git) \
             with a track record of delivering measurable impact. \
             Seeking to contribute expertise in staff engineer role."
        );
    }

    #[test]
    fn test_impact_driven_summary() {
        let mut manager = entry(
            "Northline Freight",
            "Operations Manager",
            "2020-01",
            "",
            "Manage inbound logistics",
        );
        manager.is_current = true;
        manager.achievements = vec!["Cut dock time by 30%".to_string()];

        assert_eq!(
            local_summary(&[manager], None, today()),
            "Accomplished Operations Manager with 4+ years of professional services experience. \
             Specialized in Project Management with demonstrated success in driving results \
             and optimizing performance. Strong background in strategic planning and execution."
        );
    }

    #[test]
    fn test_leadership_summary_from_position_alone() {
        let lead = entry("Harbor Foods", "Shift Lead", "2021-06", "2023-06", "Ran the night crew");
        assert_eq!(
            local_summary(&[lead], None, today()),
            "Leadership-focused Shift Lead with 2+ years of experience managing teams \
             and delivering operational excellence. Expertise in Leadership with a proven \
             ability to drive organizational growth and team development."
        );
    }

    #[test]
    fn test_standard_summary_with_default_competencies() {
        let cashier = entry("Corner Store", "Cashier", "2022-01", "2023-01", "Handled the register");
        assert_eq!(
            local_summary(&[cashier], None, today()),
            "Dedicated Cashier with 1+ years of experience in retail. \
             Proficient in operations and management with a commitment to quality and innovation. \
             Seeking opportunities to leverage expertise in challenging new environment."
        );
    }

    #[test]
    fn test_unquantified_leadership_is_not_high_impact() {
        let lead = entry("Harbor Foods", "Clerk", "2021-06", "2023-06", "Supervised stock rotation");
        assert!(!is_high_impact(&[lead.clone()]));
        assert!(has_leadership(&[lead]));
    }

    #[test]
    fn test_blank_target_role_is_ignored() {
        let cashier = entry("Corner Store", "Cashier", "2022-01", "2023-01", "Handled the register");
        let summary = local_summary(&[cashier], Some(""), today());
        assert!(summary.starts_with("Dedicated Cashier"));
    }

    #[test]
    fn test_missing_position_reads_professional() {
        let unnamed = entry("Corner Store", "", "2022-01", "2023-01", "");
        assert!(local_summary(&[unnamed], None, today()).starts_with("Dedicated professional with 1+"));
    }

    #[test]
    fn test_total_years_skips_unreadable_and_inverted_ranges() {
        let history = vec![
            entry("A", "X", "2019-01", "2021-01", ""),
            entry("B", "X", "Jan 2015", "2016-01", ""),
            entry("C", "X", "2023-01", "2022-01", ""),
            entry("D", "X", "2022-01", "", ""),
        ];
        // Only the first entry counts: 731 days.
        assert_eq!(total_years(&history, today()), 2);
    }

    #[test]
    fn test_current_entry_runs_to_today() {
        let mut current = entry("A", "X", "2014-01-01", "", "");
        current.is_current = true;
        assert_eq!(total_years(&[current], today()), 10);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 1);
        assert_eq!(parse_date("2020-03-01"), expected);
        assert_eq!(parse_date("2020-03"), expected);
        assert_eq!(parse_date("2020"), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(parse_date("03/2020"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_industry_checks_first_non_empty_field_only() {
        let history = vec![entry("Acme", "Software Engineer", "", "", "")];
        assert_eq!(industry_of(&history), DEFAULT_INDUSTRY);

        let history = vec![entry("", "Software Engineer", "", "", "")];
        assert_eq!(industry_of(&history), "tech");
    }

    #[test]
    fn test_summary_skills_capped_and_deduplicated() {
        let history = vec![
            entry("", "Developer", "", "", "software code program design web app database sql api"),
            entry("", "Developer", "", "", "software and a team"),
        ];
        let skills = summary_skills(&history, None);
        assert_eq!(skills.len(), MAX_SUMMARY_SKILLS);
        assert_eq!(skills[0], "Software Development");
        assert!(!skills.contains(&"Full-Stack Development"));
    }
}
