//! Quality Analyzer: scores a resume in isolation, 0–100, with one message per finding.
//!
//! The report is a fold: each rule inspects the document and returns a
//! `RuleOutcome` (messages routed to report channels plus a point deduction).
//! Outcomes are applied to a report that starts at 100, in `RULES` order, and the
//! score is clamped at the end. Every point lost is itemized in `deductions`.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{ATS_VERBS, DATA_SKILLS, LEADERSHIP_KEYWORDS, TECH_SKILLS};
use crate::analysis::{char_len, has_digit};
use crate::models::resume::Resume;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 20;
const RECOMMENDED_SKILL_COUNT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

/// One itemized point loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub rule: String,
    pub points: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub overall_score: u32, // 0 – 100
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub ats_optimization: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub impact_enhancements: Vec<String>,
    pub deductions: Vec<Deduction>,
}

impl QualityReport {
    fn initial() -> Self {
        Self {
            overall_score: 100,
            strengths: vec![],
            weaknesses: vec![],
            suggestions: vec![],
            ats_optimization: vec![],
            skill_gaps: vec![],
            impact_enhancements: vec![],
            deductions: vec![],
        }
    }

    fn apply(mut self, outcome: RuleOutcome) -> Self {
        for (channel, message) in outcome.notes {
            let list = match channel {
                Channel::Strength => &mut self.strengths,
                Channel::Weakness => &mut self.weaknesses,
                Channel::Suggestion => &mut self.suggestions,
                Channel::Ats => &mut self.ats_optimization,
                Channel::SkillGap => &mut self.skill_gaps,
                Channel::Impact => &mut self.impact_enhancements,
            };
            list.push(message);
        }
        self.deductions.extend(outcome.deductions);
        self
    }

    fn finish(mut self) -> Self {
        let lost: u32 = self.deductions.iter().map(|d| d.points).sum();
        self.overall_score = 100u32.saturating_sub(lost).min(100);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule plumbing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Strength,
    Weakness,
    Suggestion,
    Ats,
    SkillGap,
    Impact,
}

#[derive(Debug, Default)]
struct RuleOutcome {
    notes: Vec<(Channel, String)>,
    deductions: Vec<Deduction>,
}

impl RuleOutcome {
    fn note(&mut self, channel: Channel, message: impl Into<String>) -> &mut Self {
        self.notes.push((channel, message.into()));
        self
    }

    fn deduct(&mut self, rule: &str, points: u32, reason: &str) -> &mut Self {
        self.deductions.push(Deduction {
            rule: rule.to_string(),
            points,
            reason: reason.to_string(),
        });
        self
    }
}

/// Read-only view every rule receives.
struct RuleInput<'a> {
    resume: &'a Resume,
    /// Lower-cased target role, if one was given.
    target_role: Option<String>,
}

type Rule = fn(&RuleInput) -> RuleOutcome;

/// Applied in this order; the order fixes message order in the report.
const RULES: &[Rule] = &[
    contact_rule,
    summary_rule,
    experience_rule,
    education_rule,
    skills_rule,
    ats_rule,
    role_gap_rule,
];

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume`, optionally against a target-role label. Total: never fails.
pub fn analyze_quality(resume: &Resume, target_role: Option<&str>) -> QualityReport {
    let input = RuleInput {
        resume,
        target_role: target_role.map(str::to_lowercase),
    };

    RULES
        .iter()
        .map(|rule| rule(&input))
        .fold(QualityReport::initial(), QualityReport::apply)
        .finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

fn contact_rule(input: &RuleInput) -> RuleOutcome {
    let info = &input.resume.personal_info;
    let mut out = RuleOutcome::default();
    if info.email.is_empty() || info.phone.is_empty() {
        out.note(Channel::Weakness, "Missing contact information")
            .deduct("contact", 10, "Email or phone number missing");
    } else {
        out.note(Channel::Strength, "Complete contact information");
    }
    out
}

fn summary_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    if char_len(&input.resume.summary) < MIN_SUMMARY_CHARS {
        out.note(Channel::Weakness, "Professional summary is too short or missing")
            .note(
                Channel::Suggestion,
                "Write a compelling 2-3 sentence professional summary highlighting your key achievements",
            )
            .deduct("summary", 15, "Summary shorter than 50 characters");
    } else {
        out.note(Channel::Strength, "Strong professional summary");
    }
    out
}

/// An empty section costs 20 points and skips the per-entry checks.
/// Per-entry findings are reported but cost nothing.
fn experience_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let experience = &input.resume.experience;

    if experience.is_empty() {
        out.note(Channel::Weakness, "No work experience listed")
            .deduct("experience", 20, "No work experience entries");
        return out;
    }

    for (index, exp) in experience.iter().enumerate() {
        let n = index + 1;

        if char_len(&exp.description) < MIN_DESCRIPTION_CHARS {
            out.note(Channel::Weakness, format!("Experience #{n} lacks detail"))
                .note(
                    Channel::Suggestion,
                    format!(
                        "Add more details about your role and responsibilities in \"{}\"",
                        exp.position
                    ),
                );
        }

        if exp.achievements.is_empty() {
            out.note(Channel::Weakness, format!("Experience #{n} has no achievements"))
                .note(
                    Channel::Suggestion,
                    format!(
                        "Add 3-5 bullet points highlighting your achievements at {}",
                        exp.company
                    ),
                );
        } else if exp.achievements.iter().any(|a| has_digit(a)) {
            out.note(
                Channel::Strength,
                format!("Quantified achievements in {}", exp.company),
            );
        } else {
            out.note(
                Channel::Impact,
                format!(
                    "Add quantifiable metrics to your achievements in \"{}\"",
                    exp.position
                ),
            );
        }
    }
    out
}

fn education_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    if input.resume.education.is_empty() {
        out.note(Channel::Weakness, "No education listed")
            .deduct("education", 10, "No education entries");
    } else {
        out.note(Channel::Strength, "Education section complete");
    }
    out
}

fn skills_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let count = input.resume.skills.len();
    if count == 0 {
        out.note(Channel::Weakness, "No skills listed")
            .note(Channel::Suggestion, "Add 5-10 relevant technical and soft skills")
            .deduct("skills", 15, "No skills listed");
    } else if count < RECOMMENDED_SKILL_COUNT {
        out.note(Channel::Weakness, "Too few skills listed")
            .note(
                Channel::Suggestion,
                "Consider adding more skills to strengthen your profile",
            )
            .deduct("skills", 5, "Fewer than 5 skills listed");
    } else {
        out.note(
            Channel::Strength,
            format!("Well-rounded skills list ({count} skills)"),
        );
    }
    out
}

/// Searches the serialized document, field names included.
fn ats_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let text = input.resume.search_text().to_lowercase();

    if !ATS_VERBS.iter().any(|verb| text.contains(verb)) {
        out.note(
            Channel::Ats,
            "Use action verbs like \"Led\", \"Managed\", \"Developed\" in your experience",
        )
        .deduct("ats", 5, "No action verbs found");
    }

    if !input.resume.personal_info.has_linkedin() {
        out.note(Channel::Ats, "Add your LinkedIn profile for better visibility");
    }
    out
}

fn role_gap_rule(input: &RuleInput) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let Some(role) = input.target_role.as_deref() else {
        return out;
    };
    let role_mentions = |terms: &[&str]| terms.iter().any(|t| role.contains(t));

    if role_mentions(&["engineer", "developer"]) {
        let skills = input.resume.skills_text();
        if !TECH_SKILLS.iter().any(|s| skills.contains(s)) {
            out.note(
                Channel::SkillGap,
                "Add technical skills relevant to software engineering",
            );
        }
    }

    if role_mentions(&["manager", "lead"]) {
        let experience = input.resume.experience_text().to_lowercase();
        if !LEADERSHIP_KEYWORDS.iter().any(|k| experience.contains(k)) {
            out.note(
                Channel::Suggestion,
                "Highlight leadership and management experience for managerial roles",
            );
        }
    }

    if role_mentions(&["data", "analyst"]) {
        let skills = input.resume.skills_text();
        if !DATA_SKILLS.iter().any(|s| skills.contains(s)) {
            out.note(
                Channel::SkillGap,
                "Add data analysis skills like SQL, Python, or Excel",
            );
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn contact() -> PersonalInfo {
        PersonalInfo {
            first_name: "Jordan".to_string(),
            last_name: "Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "Monroe, LA".to_string(),
            linkedin: Some("linkedin.com/in/jreyes".to_string()),
            website: None,
        }
    }

    fn skills(n: usize) -> Vec<String> {
        ["Rust", "Go", "Kafka", "Terraform", "Postgres", "Linux", "Redis"]
            .iter()
            .take(n)
            .map(|s| s.to_string())
            .collect()
    }

    fn ideal_resume() -> Resume {
        Resume {
            personal_info: contact(),
            summary: "Backend engineer with eight years building payment platforms at scale."
                .to_string(),
            experience: vec![ExperienceEntry {
                company: "Acme Pay".to_string(),
                position: "Senior Backend Engineer".to_string(),
                start_date: "2019-04".to_string(),
                end_date: String::new(),
                is_current: true,
                description: "Owned the settlement pipeline and its on-call rotation.".to_string(),
                achievements: vec!["Cut settlement latency by 40%".to_string()],
            }],
            education: vec![EducationEntry {
                institution: "ULM".to_string(),
                degree: "BS".to_string(),
                field: "Computer Science".to_string(),
                ..Default::default()
            }],
            skills: skills(6),
        }
    }

    #[test]
    fn test_empty_document_scores_25() {
        let report = analyze_quality(&Resume::default(), None);
        assert_eq!(report.overall_score, 25);
        let rules: Vec<&str> = report.deductions.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(
            rules,
            vec!["contact", "summary", "experience", "education", "skills", "ats"]
        );
    }

    #[test]
    fn test_ideal_document_scores_100() {
        let report = analyze_quality(&ideal_resume(), None);
        assert_eq!(report.overall_score, 100);
        assert!(report.weaknesses.is_empty(), "{:?}", report.weaknesses);
        assert!(report.ats_optimization.is_empty());
        assert!(report.deductions.is_empty());
        assert!(report
            .strengths
            .contains(&"Quantified achievements in Acme Pay".to_string()));
        assert!(report
            .strengths
            .contains(&"Well-rounded skills list (6 skills)".to_string()));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = ideal_resume();
        let a = analyze_quality(&resume, Some("Data Engineer"));
        let b = analyze_quality(&resume, Some("Data Engineer"));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    /// Golden: 40-char summary, one thin experience entry, 6 skills.
    /// Only the summary costs points; per-entry findings are free and the
    /// serialized `achievements` field name satisfies the ATS verb check.
    #[test]
    fn test_golden_thin_experience_scores_85() {
        let resume = Resume {
            personal_info: contact(),
            summary: "Motivated analyst seeking new challenges".to_string(),
            experience: vec![ExperienceEntry {
                company: "Delta Foods".to_string(),
                position: "Clerk".to_string(),
                start_date: "2022-01".to_string(),
                description: "Ran a till".to_string(),
                ..Default::default()
            }],
            education: ideal_resume().education,
            skills: skills(6),
        };
        assert_eq!(resume.summary.len(), 40);
        assert_eq!(resume.experience[0].description.len(), 10);

        let report = analyze_quality(&resume, None);
        assert_eq!(report.overall_score, 85);
        assert_eq!(
            report.weaknesses,
            vec![
                "Professional summary is too short or missing",
                "Experience #1 lacks detail",
                "Experience #1 has no achievements",
            ]
        );
        assert!(report.suggestions[1].contains("\"Clerk\""));
        assert!(report.suggestions[2].contains("Delta Foods"));
        assert_eq!(report.deductions.len(), 1);
        assert_eq!(report.deductions[0].rule, "summary");
    }

    #[test]
    fn test_null_fields_score_like_empty_fields() {
        let from_nulls: Resume = serde_json::from_str(
            r#"{"summary": null, "experience": [{"description": null, "achievements": null}]}"#,
        )
        .unwrap();
        let from_empties = Resume {
            experience: vec![ExperienceEntry::default()],
            ..Default::default()
        };
        let report = analyze_quality(&from_nulls, None);
        assert_eq!(report, analyze_quality(&from_empties, None));
        // contact, summary, education, skills; the entry itself is free
        assert_eq!(report.overall_score, 50);
        assert!(report.weaknesses.contains(&"Experience #1 lacks detail".to_string()));
    }

    #[test]
    fn test_missing_phone_costs_10() {
        let mut resume = ideal_resume();
        resume.personal_info.phone.clear();
        let report = analyze_quality(&resume, None);
        assert_eq!(report.overall_score, 90);
        assert_eq!(report.weaknesses, vec!["Missing contact information"]);
    }

    #[test]
    fn test_few_skills_costs_5() {
        let mut resume = ideal_resume();
        resume.skills = skills(3);
        let report = analyze_quality(&resume, None);
        assert_eq!(report.overall_score, 95);
        assert!(report.weaknesses.contains(&"Too few skills listed".to_string()));
    }

    #[test]
    fn test_unquantified_achievements_become_impact_note() {
        let mut resume = ideal_resume();
        resume.experience[0].achievements = vec!["Improved the settlement pipeline".to_string()];
        let report = analyze_quality(&resume, None);
        assert_eq!(report.overall_score, 100);
        assert_eq!(
            report.impact_enhancements,
            vec!["Add quantifiable metrics to your achievements in \"Senior Backend Engineer\""]
        );
    }

    #[test]
    fn test_experience_is_reported_by_one_based_position() {
        let mut resume = ideal_resume();
        resume.experience.push(ExperienceEntry {
            company: "Beta".to_string(),
            position: "Intern".to_string(),
            description: "Short".to_string(),
            achievements: vec!["Wrote docs".to_string()],
            ..Default::default()
        });
        let report = analyze_quality(&resume, None);
        assert!(report.weaknesses.contains(&"Experience #2 lacks detail".to_string()));
        assert!(!report.weaknesses.iter().any(|w| w.contains("#1")));
    }

    #[test]
    fn test_missing_linkedin_is_a_free_ats_note() {
        let mut resume = ideal_resume();
        resume.personal_info.linkedin = None;
        let report = analyze_quality(&resume, None);
        assert_eq!(report.overall_score, 100);
        assert_eq!(
            report.ats_optimization,
            vec!["Add your LinkedIn profile for better visibility"]
        );
    }

    #[test]
    fn test_software_engineer_without_tech_skills_gets_gap() {
        let resume = ideal_resume();
        let report = analyze_quality(&resume, Some("Senior Software Engineer"));
        assert!(report
            .skill_gaps
            .iter()
            .any(|g| g.contains("software engineering")));
    }

    #[test]
    fn test_tech_skill_match_is_case_sensitive_substring() {
        let mut resume = ideal_resume();
        resume.skills.push("JavaScript".to_string());
        let report = analyze_quality(&resume, Some("frontend developer"));
        assert!(report.skill_gaps.is_empty());

        resume.skills.pop();
        resume.skills.push("javascript".to_string());
        let report = analyze_quality(&resume, Some("frontend developer"));
        assert_eq!(report.skill_gaps.len(), 1);
    }

    #[test]
    fn test_manager_role_without_leadership_gets_suggestion() {
        let mut resume = ideal_resume();
        resume.experience[0].description = "Owned the settlement pipeline end to end.".to_string();
        resume.experience[0].position = "Backend Engineer".to_string();
        let report = analyze_quality(&resume, Some("Engineering Manager"));
        assert!(report
            .suggestions
            .contains(&"Highlight leadership and management experience for managerial roles".to_string()));

        resume.experience[0].description = "Supervised a team of four engineers.".to_string();
        let report = analyze_quality(&resume, Some("Engineering Manager"));
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_data_role_without_data_skills_gets_gap() {
        let report = analyze_quality(&ideal_resume(), Some("Data Analyst"));
        assert_eq!(
            report.skill_gaps,
            vec!["Add data analysis skills like SQL, Python, or Excel"]
        );
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        let report = analyze_quality(&ideal_resume(), Some("DATA ANALYST"));
        assert_eq!(report.skill_gaps.len(), 1);
    }

    #[test]
    fn test_score_never_exceeds_bounds() {
        let report = analyze_quality(&Resume::default(), Some("Lead Data Engineer"));
        assert!(report.overall_score <= 100);
        let lost: u32 = report.deductions.iter().map(|d| d.points).sum();
        assert_eq!(report.overall_score, 100 - lost);
    }
}
